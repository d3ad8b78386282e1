use super::layout;
use crate::views::register::REGISTER_HREF;
use maud::{html, Markup};
use signup_form::ConfirmationParams;

pub const COMPLETE_PATH: &str = "/complete";

const PASSWORD_MASK: &str = "●●●●●●●●";

pub fn page(params: &ConfirmationParams, htmx_src: &str) -> Markup {
    layout::page(
        "Confirm",
        htmx_src,
        html! {
            div.card.wide {
                h1 { "Confirm Registration" }
                div.alert.alert-info role="status" {
                    "Please review your details. If everything is correct, complete the registration."
                }
                dl {
                    dt { "Name" }
                    dd #confirm-name { (params.full_name()) }
                    dt { "Email" }
                    dd #confirm-email { (params.email) }
                    dt { "Password" }
                    dd { (PASSWORD_MASK) }
                }
                div.actions {
                    a.button.outlined href=(REGISTER_HREF) { "Edit" }
                    form method="post" action=(COMPLETE_PATH) {
                        input type="hidden" name="firstName" value=(params.first_name);
                        input type="hidden" name="lastName" value=(params.last_name);
                        input type="hidden" name="email" value=(params.email);
                        button.button.primary type="submit" { "Complete registration" }
                    }
                }
            }
            p.note { "Edit starts a new form; nothing is saved until you complete." }
        },
    )
}
