use crate::config::StockConfig;
use crate::database::StockRepository;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
mod database;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn StockRepository>,
}

// every route the service answers, anything else falls through to axum's 404
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(features::stocks::stocks_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StockConfig::from_env()?;

    // one pool for the lifetime of the process, handed to every handler through AppState
    let repo = database::connect(&config).await?;

    let app_state = AppState { repo };

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}
