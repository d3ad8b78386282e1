// File: src/response.rs
// Purpose: Navigation response - 303 for browsers, HX-Redirect for htmx

use crate::request::HtmxRequest;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

pub struct Navigate {
    location: String,
    htmx: bool,
}

impl Navigate {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            htmx: false,
        }
    }

    /// Navigate the way the requesting client understands
    pub fn for_request(request: &HtmxRequest, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            htmx: request.is_htmx,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl IntoResponse for Navigate {
    fn into_response(self) -> Response {
        let Ok(value) = HeaderValue::from_str(&self.location) else {
            tracing::error!(location = %self.location, "invalid navigation target");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        };

        if self.htmx {
            (StatusCode::OK, [(HX_REDIRECT, value)]).into_response()
        } else {
            (StatusCode::SEE_OTHER, [(header::LOCATION, value)]).into_response()
        }
    }
}
