//! Shot Tracker HTTP Server
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin shot-tracker-server
//! SHOT_TRACKER_CONFIG=shot-tracker.toml cargo run --bin shot-tracker-server
//! ```
//!
//! # Environment Variables
//!
//! - `SHOT_TRACKER_CONFIG`: path to a TOML config file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shot_tracker::config::ServiceConfig;
use shot_tracker::http::{create_router, AppState};
use shot_tracker::rifles::{LocalRifleRepository, RifleRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Shot Tracker HTTP Server");

    let repository = Arc::new(LocalRifleRepository::new()) as Arc<dyn RifleRepository>;
    let state = AppState::new(repository).with_wind_model(config.ballistics.wind_model);
    info!(wind_model = %state.wind_model, "Rifle registry initialized (in-memory)");

    let app = create_router(state);

    let addr = config.bind_addr().await?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
