//! HTTP server for noshd

use crate::catalog::Catalog;
use crate::favorites::Favorites;
use crate::ledger::OrderLedger;
use crate::routes;
use anyhow::Result;
use axum::Router;
use nosh_common::NoshConfig;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ledger: Arc<RwLock<OrderLedger>>,
    pub favorites: Arc<RwLock<Favorites>>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, ledger: OrderLedger) -> Self {
        Self {
            catalog: Arc::new(catalog),
            ledger: Arc::new(RwLock::new(ledger)),
            favorites: Arc::new(RwLock::new(Favorites::new())),
            start_time: Instant::now(),
        }
    }
}

/// Build the full router. Split out of `run` so tests can drive the app
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::meta_routes())
        .merge(routes::restaurant_routes())
        .merge(routes::search_routes())
        .merge(routes::order_routes())
        .merge(routes::favorites_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The demo UI is served from anywhere, so allow all origins
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server
pub async fn run(state: AppState, config: &NoshConfig) -> Result<()> {
    let state = Arc::new(state);
    let router = app(state);

    let addr = config.server.bind_addr.as_str();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
