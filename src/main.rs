use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use delite_web::config::AppConfig;
use delite_web::handlers;
use delite_web::services::api::http::HttpBookingApi;
use delite_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    tracing::info!(
        "using booking API at {} (timeout {:?})",
        config.api_url,
        config.api_timeout
    );
    let api = HttpBookingApi::new(config.api_url.clone(), config.api_timeout)?;

    let state = Arc::new(AppState { api: Arc::new(api) });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
