//! Signup server
//!
//! Serves the registration flow: home → register form → confirmation →
//! completion. Each visit to the register page mounts a fresh
//! [`signup_form::FormState`] kept in memory until the user submits or the
//! registry evicts it.

pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod form_body;
pub mod handlers;
pub mod registry;
pub mod request;
pub mod response;
pub mod submitter;
pub mod views;

pub use app::{router, AppState};
pub use config::Config;
pub use error::AppError;
pub use registry::FormRegistry;
pub use submitter::LoggingSubmitter;
