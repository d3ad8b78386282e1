// File: src/views/register.rs
// Purpose: Register page, the form itself, and per-field feedback fragments

use super::layout;
use maud::{html, Markup};
use signup_form::{FieldId, FieldValue, FormState};
use signup_types::{Gender, HOBBY_TAGS, PREFECTURES};
use uuid::Uuid;

pub const REGISTER_HREF: &str = signup_form::REGISTER_PATH;

pub const SUMMARY_MESSAGE: &str = "Some entries are invalid. Please check each field.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Registration could not be completed. Your input has been kept; please try again.";

fn error_id(field: FieldId) -> String {
    format!("error-{}", field.wire_name())
}

fn change_url(id: Uuid, field: FieldId) -> String {
    format!("/register/{}/change/{}", id, field.wire_name())
}

fn blur_url(id: Uuid, field: FieldId) -> String {
    format!("/register/{}/blur/{}", id, field.wire_name())
}

pub fn submit_url(id: Uuid) -> String {
    format!("/register/{}/submit", id)
}

pub fn page(id: Uuid, form: &FormState, htmx_src: &str) -> Markup {
    layout::page(
        "Register",
        htmx_src,
        html! {
            a.back href="/" { "← Back to home" }
            div.card {
                h1 { "User Registration" }
                (form_markup(id, form))
            }
            (layout::leave_guard(form.is_dirty()))
            p.note { "Field-level validation with a server-held form state." }
        },
    )
}

/// The `<form>` element; also the swap target of a submit attempt
pub fn form_markup(id: Uuid, form: &FormState) -> Markup {
    let action = submit_url(id);
    html! {
        form #register-form method="post" action=(action) novalidate
            data-form-id=(id.to_string())
            hx-post=(action) hx-target="this" hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']" {
            @for &field in form.variant().fields() {
                (field_row(id, form, field))
            }
            (summary(form))
            @if form.last_failure().is_some() {
                div.alert.alert-error role="alert" { (SUBMIT_FAILED_MESSAGE) }
            }
            button.button.primary type="submit" disabled[form.is_submitting()] {
                @if form.is_submitting() { "Submitting..." } @else { "Register" }
            }
        }
    }
}

/// Response to a change or blur: the field's error slot, with the summary and
/// leave guard refreshed out of band.
pub fn field_feedback(form: &FormState, field: FieldId) -> Markup {
    html! {
        (error_slot(form, field))
        (summary_oob(form))
        (layout::leave_guard_oob(form.is_dirty()))
    }
}

pub fn error_slot(form: &FormState, field: FieldId) -> Markup {
    html! {
        p.field-error id=(error_id(field)) aria-live="polite" {
            @if let Some(message) = form.visible_error(field) { (message) }
        }
    }
}

fn summary(form: &FormState) -> Markup {
    html! {
        div #form-summary { (summary_body(form)) }
    }
}

fn summary_oob(form: &FormState) -> Markup {
    html! {
        div #form-summary hx-swap-oob="true" { (summary_body(form)) }
    }
}

fn summary_body(form: &FormState) -> Markup {
    html! {
        @if form.show_summary() {
            div.alert.alert-error role="alert" { (SUMMARY_MESSAGE) }
        }
    }
}

fn field_row(id: Uuid, form: &FormState, field: FieldId) -> Markup {
    let has_error = form.visible_error(field).is_some();
    let target = format!("#{}", error_id(field));
    html! {
        div.field.has-error[has_error]
            hx-post=(blur_url(id, field)) hx-trigger="focusout"
            hx-target=(target) hx-swap="outerHTML" {
            @match field {
                FieldId::Gender => { (gender_input(id, form, &target)) }
                FieldId::Prefecture => { (prefecture_input(id, form, &target)) }
                FieldId::Hobbies => { (hobby_input(id, form, &target)) }
                _ => { (text_input(id, form, field, &target)) }
            }
            (error_slot(form, field))
        }
    }
}

fn text_value(form: &FormState, field: FieldId) -> String {
    match form.record().get(field) {
        Some(FieldValue::Text(value)) => value,
        _ => String::new(),
    }
}

fn input_type(field: FieldId) -> &'static str {
    match field {
        FieldId::Email => "email",
        FieldId::Password | FieldId::ConfirmPassword => "password",
        _ => "text",
    }
}

fn text_input(id: Uuid, form: &FormState, field: FieldId, target: &str) -> Markup {
    let name = field.wire_name();
    html! {
        label for=(name) { (field.label()) " *" }
        input id=(name) name=(name) type=(input_type(field)) value=(text_value(form, field)) required
            hx-post=(change_url(id, field)) hx-trigger="input changed delay:300ms"
            hx-target=(target) hx-swap="outerHTML";
    }
}

fn gender_input(id: Uuid, form: &FormState, target: &str) -> Markup {
    let field = FieldId::Gender;
    let current = form.record().gender();
    html! {
        span { (field.label()) " *" }
        div.choices {
            @for gender in Gender::ALL {
                label {
                    input type="radio" name=(field.wire_name()) value=(gender.value())
                        checked[current == gender.value()]
                        hx-post=(change_url(id, field)) hx-trigger="change"
                        hx-target=(target) hx-swap="outerHTML";
                    " " (gender.label())
                }
            }
        }
    }
}

fn prefecture_input(id: Uuid, form: &FormState, target: &str) -> Markup {
    let field = FieldId::Prefecture;
    let name = field.wire_name();
    let current = form.record().prefecture();
    html! {
        label for=(name) { (field.label()) " *" }
        select id=(name) name=(name)
            hx-post=(change_url(id, field)) hx-trigger="change"
            hx-target=(target) hx-swap="outerHTML" {
            option value="" selected[current.is_empty()] { "Select..." }
            @for prefecture in PREFECTURES.iter() {
                option value=(prefecture.slug) selected[current == prefecture.slug] {
                    (prefecture.name)
                }
            }
        }
    }
}

fn hobby_input(id: Uuid, form: &FormState, target: &str) -> Markup {
    let field = FieldId::Hobbies;
    let chosen = form.record().hobbies();
    html! {
        span { (field.label()) " *" }
        div.choices {
            @for tag in HOBBY_TAGS {
                label {
                    input type="checkbox" name=(field.wire_name()) value=(tag)
                        checked[chosen.iter().any(|c| c == tag)]
                        hx-post=(change_url(id, field)) hx-trigger="change"
                        hx-target=(target) hx-swap="outerHTML";
                    " " (tag)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_form::FormVariant;

    fn id() -> Uuid {
        Uuid::nil()
    }

    #[test]
    fn basic_form_renders_five_inputs() {
        let form = FormState::new(FormVariant::Basic);
        let html = form_markup(id(), &form).into_string();
        for field in FormVariant::Basic.fields() {
            assert!(html.contains(&format!(r#"name="{}""#, field.wire_name())), "{field}");
        }
        assert!(!html.contains(r#"name="gender""#));
        assert!(html.contains("/register/00000000-0000-0000-0000-000000000000/submit"));
    }

    #[test]
    fn extended_form_renders_choices() {
        let form = FormState::new(FormVariant::Extended);
        let html = form_markup(id(), &form).into_string();
        assert!(html.contains(r#"type="radio""#));
        assert!(html.contains("北海道"));
        assert!(html.contains(r#"value="photography""#));
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = FormState::new(FormVariant::Basic);
        form.change(FieldId::Email, FieldValue::text("nope")).unwrap();
        let hidden = error_slot(&form, FieldId::Email).into_string();
        assert!(!hidden.contains("valid email"));

        form.blur(FieldId::Email);
        let shown = field_feedback(&form, FieldId::Email).into_string();
        assert!(shown.contains("Please enter a valid email address"));
        assert!(shown.contains(SUMMARY_MESSAGE));
        assert!(shown.contains(r#"data-dirty="true""#));
    }

    #[test]
    fn submitting_disables_button() {
        let mut form = FormState::new(FormVariant::Basic);
        for (field, value) in [
            (FieldId::FirstName, "Taro"),
            (FieldId::LastName, "Yamada"),
            (FieldId::Email, "taro@example.jp"),
            (FieldId::Password, "Abcdef12"),
            (FieldId::ConfirmPassword, "Abcdef12"),
        ] {
            form.change(field, FieldValue::text(value)).unwrap();
        }
        form.begin_submit();
        let html = form_markup(id(), &form).into_string();
        assert!(html.contains("Submitting..."));
        assert!(html.contains(r#"type="submit" disabled"#));
    }
}
