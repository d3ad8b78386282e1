// File: src/handlers.rs
// Purpose: Route handlers - forward browser events into the mounted form and render the result

use crate::app::AppState;
use crate::error::AppError;
use crate::form_body::{field_value, parse_pairs, posted_value};
use crate::request::{HtmxRequest, RequestMode};
use crate::response::Navigate;
use crate::views;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use signup_form::{
    confirmation_location, ConfirmationParams, FieldId, FormState, SubmitOutcome, SubmitStart,
    REGISTER_PATH,
};
use std::collections::HashMap;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Where the completion step lands
pub const REGISTERED_PATH: &str = "/?registered=1";

pub async fn home(
    State(app): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Html<String> {
    let registered = query.get("registered").is_some_and(|v| v == "1");
    Html(views::home::page(app.htmx_src(), registered).into_string())
}

/// Each visit mounts a fresh form
pub async fn register_page(State(app): State<AppState>) -> Html<String> {
    let (id, form) = app.forms.mount(app.config.form.variant).await;
    Html(views::register::page(id, &form, app.htmx_src()).into_string())
}

pub async fn change_field(
    State(app): State<AppState>,
    Path((form_id, field)): Path<(Uuid, String)>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let field: FieldId = field.parse()?;
    let value = field_value(field, &parse_pairs(&body));

    let markup = app
        .forms
        .update(form_id, |form| {
            form.change(field, value)?;
            Ok(views::register::field_feedback(form, field))
        })
        .await?;
    Ok(Html(markup.into_string()))
}

/// Field Blur. The request carries the enclosing form's values; a value that
/// differs from the stored one is a change the blur overtook and is applied
/// first. An unedited field is only marked touched.
pub async fn blur_field(
    State(app): State<AppState>,
    Path((form_id, field)): Path<(Uuid, String)>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let field: FieldId = field.parse()?;
    let pairs = parse_pairs(&body);

    let markup = app
        .forms
        .update(form_id, |form| {
            if let Some(value) = posted_value(field, &pairs).filter(|_| !pairs.is_empty()) {
                if form.record().get(field).as_ref() != Some(&value) {
                    form.change(field, value)?;
                }
            }
            form.blur(field);
            Ok(views::register::field_feedback(form, field))
        })
        .await?;
    Ok(Html(markup.into_string()))
}

/// Submit Attempt. The registry lock is released while the submitter runs,
/// so a second submit meanwhile sees the form as busy. The submitter and
/// `finish_submit` run in their own task: a dropped request cannot leave the
/// form stuck in Submitting.
pub async fn submit(
    State(app): State<AppState>,
    req: HtmxRequest,
    Path(form_id): Path<Uuid>,
    body: Bytes,
) -> Result<Response, AppError> {
    let pairs = parse_pairs(&body);

    let start = app
        .forms
        .update(form_id, |form| {
            if form.is_submitting() {
                return Ok(SubmitStart::Busy);
            }
            for &field in form.variant().fields() {
                if let Some(value) = posted_value(field, &pairs) {
                    form.change(field, value)?;
                }
            }
            Ok(form.begin_submit())
        })
        .await?;

    let record = match start {
        SubmitStart::Ready(record) => record,
        SubmitStart::Busy => {
            debug!(form = %form_id, "submit ignored, already submitting");
            return Ok((StatusCode::CONFLICT, "A submission is already in progress").into_response());
        }
        SubmitStart::Invalid => {
            let form = app.forms.snapshot(form_id).await?;
            return Ok(render_form(&app, &req, form_id, &form));
        }
    };

    let forms = app.forms.clone();
    let submitter = app.submitter.clone();
    let settle = tokio::spawn(async move {
        debug!(form = %form_id, submitter = submitter.name(), "awaiting submitter");
        let result = submitter.submit(&record).await;
        forms
            .update(form_id, |form| Ok(form.finish_submit(result)))
            .await
    });

    let outcome = match settle.await {
        Ok(outcome) => outcome?,
        Err(err) => {
            error!(form = %form_id, error = %err, "submit task aborted");
            let reason = anyhow::anyhow!("submit task aborted: {}", err);
            app.forms
                .update(form_id, |form| Ok(form.finish_submit(Err(reason))))
                .await?
        }
    };

    match outcome {
        SubmitOutcome::Submitted(record) => {
            app.forms.remove(form_id).await;
            Ok(Navigate::for_request(&req, confirmation_location(&record)).into_response())
        }
        _ => {
            let form = app.forms.snapshot(form_id).await?;
            Ok(render_form(&app, &req, form_id, &form))
        }
    }
}

/// The form after an unsuccessful submit: errors shown, input kept
fn render_form(app: &AppState, req: &HtmxRequest, id: Uuid, form: &FormState) -> Response {
    match req.mode() {
        RequestMode::Fragment => {
            let markup = maud::html! {
                (views::register::form_markup(id, form))
                (views::layout::leave_guard_oob(form.is_dirty()))
            };
            Html(markup.into_string()).into_response()
        }
        RequestMode::Json => {
            let errors: HashMap<&str, &str> = form
                .errors()
                .iter()
                .map(|(field, message)| (field.wire_name(), message))
                .collect();
            let body = serde_json::json!({
                "errors": errors,
                "submitFailed": form.last_failure().is_some(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
        RequestMode::Page => {
            Html(views::register::page(id, form, app.htmx_src()).into_string()).into_response()
        }
    }
}

/// Confirmation view. An incomplete link goes back to the form.
pub async fn confirm(
    State(app): State<AppState>,
    req: HtmxRequest,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let Some(params) = ConfirmationParams::from_query(&query) else {
        debug!("incomplete confirmation link, back to the form");
        return Navigate::to(REGISTER_PATH).into_response();
    };

    match req.mode() {
        RequestMode::Json => Json(params).into_response(),
        _ => Html(views::confirm::page(&params, app.htmx_src()).into_string()).into_response(),
    }
}

/// Completion step (simulated)
pub async fn complete(req: HtmxRequest, body: Bytes) -> Response {
    let fields: HashMap<String, String> = parse_pairs(&body).into_iter().collect();

    let target = match ConfirmationParams::from_query(&fields) {
        Some(params) => {
            info!(name = %params.full_name(), email = %params.email, "registration completed");
            REGISTERED_PATH
        }
        None => {
            debug!("completion posted without details, back to the form");
            REGISTER_PATH
        }
    };
    Navigate::for_request(&req, target).into_response()
}
