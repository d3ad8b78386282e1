// File: src/app.rs
// Purpose: Shared application state and the route table

use crate::assets::{serve_signup_js, SIGNUP_JS_PATH};
use crate::config::Config;
use crate::error::render_error_page;
use crate::handlers;
use crate::registry::FormRegistry;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use signup_form::Submitter;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forms: FormRegistry,
    pub submitter: Arc<dyn Submitter>,
}

impl AppState {
    pub fn new(config: Config, submitter: Arc<dyn Submitter>) -> Self {
        let forms = FormRegistry::new(config.form.max_open_forms);
        Self {
            config: Arc::new(config),
            forms,
            submitter,
        }
    }

    pub fn htmx_src(&self) -> &str {
        &self.config.assets.htmx_src
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/register", get(handlers::register_page))
        .route("/register/:form/change/:field", post(handlers::change_field))
        .route("/register/:form/blur/:field", post(handlers::blur_field))
        .route("/register/:form/submit", post(handlers::submit))
        .route("/confirm", get(handlers::confirm))
        .route("/complete", post(handlers::complete))
        .route(SIGNUP_JS_PATH, get(serve_signup_js))
        .layer(middleware::map_response_with_state(
            state.clone(),
            render_error_page,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
