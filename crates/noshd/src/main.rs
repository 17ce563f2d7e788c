//! Nosh Daemon - mock restaurant-ordering backend
//!
//! Serves the catalog, order, favorites, and intelligent-search endpoints
//! over HTTP with static in-process data.

use anyhow::Result;
use clap::Parser;
use noshd::catalog::Catalog;
use noshd::ledger::OrderLedger;
use noshd::server::{self, AppState};
use nosh_common::NoshConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "noshd", version, about = "Mock restaurant-ordering API daemon")]
struct Args {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address from the config
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => NoshConfig::load_from(path),
        None => NoshConfig::load(),
    };
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }

    info!("Nosh Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::builtin();
    info!(
        "Catalog loaded: {} restaurants across {} cities",
        catalog.restaurants().len(),
        catalog.cities().len()
    );

    let ledger = OrderLedger::with_settings(config.orders.clone());
    let state = AppState::new(catalog, ledger);

    server::run(state, &config).await
}
