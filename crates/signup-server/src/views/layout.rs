// File: src/views/layout.rs
// Purpose: Page shell shared by every view, plus the leave guard

use crate::assets::SIGNUP_JS_PATH;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const APP_TITLE: &str = "User Registration";

const STYLE: &str = r#"
body { font-family: "Roboto", "Helvetica", "Arial", sans-serif; margin: 0; background: #fafafa; color: #212121; }
main { max-width: 1200px; margin: 0 auto; padding: 32px 16px; }
.card { max-width: 500px; margin: 32px auto; background: #fff; border-radius: 4px; padding: 24px; box-shadow: 0 1px 3px rgba(0,0,0,.2); }
.card.wide { max-width: 600px; }
h1 { text-align: center; }
.field { margin: 16px 0; display: flex; flex-direction: column; }
.field label { font-size: .9rem; margin-bottom: 4px; }
.field input, .field select { padding: 10px; font-size: 1rem; }
.field.has-error input, .field.has-error select { border-color: #d32f2f; }
.field-error { color: #d32f2f; font-size: .8rem; margin: 4px 0 0; min-height: 1em; }
.choices { display: flex; flex-wrap: wrap; gap: 12px; }
.alert { padding: 12px 16px; border-radius: 4px; margin: 16px 0; }
.alert-error { background: #fdeded; color: #5f2120; }
.alert-info { background: #e5f6fd; color: #014361; }
.alert-success { background: #edf7ed; color: #1e4620; }
.button { display: inline-block; width: 100%; padding: 10px; font-size: 1rem; border-radius: 4px; border: 1px solid #1976d2; text-align: center; text-decoration: none; box-sizing: border-box; cursor: pointer; }
.button.primary { background: #1976d2; color: #fff; }
.button.outlined { background: #fff; color: #1976d2; }
.button:disabled { opacity: .6; cursor: default; }
.back { color: #1976d2; text-decoration: none; }
.actions { display: flex; gap: 16px; margin-top: 32px; }
.actions form { flex: 1; }
.note { text-align: center; color: #666; font-size: .875rem; margin-top: 32px; }
dl dt { font-weight: bold; margin-top: 12px; }
dl dd { margin: 4px 0 0; color: #555; }
"#;

pub fn page(title: &str, htmx_src: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (APP_TITLE) }
                style { (PreEscaped(STYLE)) }
                script src=(htmx_src) defer {}
                script src=(SIGNUP_JS_PATH) defer {}
            }
            body {
                main { (body) }
            }
        }
    }
}

/// Marker the page script reads to decide whether leaving needs confirmation.
/// The form container only exposes `is_dirty`; this is the shell's side.
pub fn leave_guard(dirty: bool) -> Markup {
    html! {
        span #leave-guard hidden data-dirty=(flag(dirty)) {}
    }
}

/// Same marker, for an htmx out-of-band swap
pub fn leave_guard_oob(dirty: bool) -> Markup {
    html! {
        span #leave-guard hidden data-dirty=(flag(dirty)) hx-swap-oob="true" {}
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_includes_scripts_and_title() {
        let html = page("Register", "/htmx.js", html! { p { "hi" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Register | User Registration</title>"));
        assert!(html.contains(r#"src="/htmx.js""#));
        assert!(html.contains(SIGNUP_JS_PATH));
    }

    #[test]
    fn guard_reflects_dirty_flag() {
        assert!(leave_guard(true).into_string().contains(r#"data-dirty="true""#));
        let oob = leave_guard_oob(false).into_string();
        assert!(oob.contains(r#"data-dirty="false""#));
        assert!(oob.contains(r#"hx-swap-oob="true""#));
    }
}
