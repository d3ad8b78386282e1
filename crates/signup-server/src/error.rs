use crate::app::AppState;
use crate::config::AssetsConfig;
use crate::views;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use signup_types::FormError;
use thiserror::Error;
use uuid::Uuid;

/// Errors a handler can return with `?`
#[derive(Debug, Error)]
pub enum AppError {
    /// The form id is not (or no longer) mounted
    #[error("form {0} not found")]
    UnknownForm(Uuid),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownForm(_) | AppError::Form(FormError::UnknownFieldName(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Form(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::UnknownForm(id) => {
                tracing::debug!(form = %id, "request for unknown form");
                "This form has expired. Please start again.".to_string()
            }
            AppError::Form(err) => {
                tracing::debug!(error = %err, "rejected form request");
                err.to_string()
            }
            AppError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                "Something went wrong".to_string()
            }
        };
        let html = views::error::page(status, &message, &AssetsConfig::default().htmx_src);
        let mut response = (status, Html(html.into_string())).into_response();
        response
            .extensions_mut()
            .insert(ErrorPage { status, message });
        response
    }
}

/// Status and message of an error response, kept so the page can be
/// re-rendered with the configured assets
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub message: String,
}

/// Response mapper: re-renders error pages with `[assets] htmx_src`
pub async fn render_error_page(State(app): State<AppState>, mut response: Response) -> Response {
    let Some(page) = response.extensions_mut().remove::<ErrorPage>() else {
        return response;
    };
    let html = views::error::page(page.status, &page.message, app.htmx_src());
    (page.status, Html(html.into_string())).into_response()
}
