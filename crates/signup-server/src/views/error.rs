use super::layout;
use crate::views::register::REGISTER_HREF;
use axum::http::StatusCode;
use maud::{html, Markup};

pub fn page(status: StatusCode, message: &str, htmx_src: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    layout::page(
        title,
        htmx_src,
        html! {
            div.card {
                h1 { (status.as_u16()) " " (title) }
                p { (message) }
                a.back href=(REGISTER_HREF) { "Start a new registration" }
                " · "
                a.back href="/" { "Go home" }
            }
        },
    )
}
