// File: src/request.rs
// Purpose: Request flavour - htmx fragment request, JSON client, or plain browser navigation

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// htmx swap: answer with a fragment, navigate with `HX-Redirect`
    Fragment,
    Json,
    /// Full page load or plain form post
    Page,
}

#[derive(Debug, Clone)]
pub struct HtmxRequest {
    pub is_htmx: bool,
    pub accepts_json: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for HtmxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("hx-request")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let accepts_json = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(|accept| accept.contains("application/json"))
            .unwrap_or(false);

        Ok(HtmxRequest {
            is_htmx,
            accepts_json,
        })
    }
}

impl HtmxRequest {
    pub fn mode(&self) -> RequestMode {
        if self.is_htmx {
            RequestMode::Fragment
        } else if self.accepts_json {
            RequestMode::Json
        } else {
            RequestMode::Page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn htmx_wins_over_accept() {
        let req = HtmxRequest {
            is_htmx: true,
            accepts_json: true,
        };
        assert_eq!(req.mode(), RequestMode::Fragment);
    }

    #[test]
    fn browser_default_is_page() {
        let req = HtmxRequest {
            is_htmx: false,
            accepts_json: false,
        };
        assert_eq!(req.mode(), RequestMode::Page);
    }
}
