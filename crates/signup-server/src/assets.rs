use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Page script, embedded at compile time: the leave guard.
pub const SIGNUP_JS: &str = include_str!("../public/signup.js");

/// Canonical URL path for serving the page script.
pub const SIGNUP_JS_PATH: &str = "/_signup/signup.js";

pub async fn serve_signup_js() -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SIGNUP_JS,
    )
        .into_response()
}
