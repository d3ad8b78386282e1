use super::layout;
use crate::views::register::REGISTER_HREF;
use maud::{html, Markup};

pub fn page(htmx_src: &str, registered: bool) -> Markup {
    layout::page(
        "Home",
        htmx_src,
        html! {
            div style="text-align: center; margin-top: 64px;" {
                h1 { "User Registration" }
                p { "A multi-step registration form: enter, confirm, complete." }
                @if registered {
                    div.alert.alert-success role="status" { "Registration complete!" }
                }
                div.card {
                    h2 { "Get started" }
                    p { "Create a new account." }
                    a.button.primary href=(REGISTER_HREF) { "Register" }
                }
            }
        },
    )
}
