use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::scrape;

mod handlers;
pub mod types;

/// Server state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    /// Fetch client reused across requests
    pub client: reqwest::Client,
}

impl ApiState {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: scrape::fetch::build_client()?,
        })
    }
}

/// Build the router with both scrape entry points
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/scrape",
            get(handlers::scrape_get).post(handlers::scrape_post),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn start_server(addr: &str, state: ApiState) -> anyhow::Result<()> {
    tracing::info!("starting scrape server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
