use anyhow::{Context, Result};
use signup_server::{router, AppState, Config, LoggingSubmitter};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let mut config = Config::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });
    config.apply_env()?;

    let addr = config.server.address();
    info!(
        variant = %config.form.variant,
        max_open_forms = config.form.max_open_forms,
        "signup server starting"
    );

    let state = AppState::new(config, Arc::new(LoggingSubmitter));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
