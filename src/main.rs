//! Interest Calculator HTTP server.
//!
//! Usage: `interest-calculator [CONFIG_PATH]`. The configuration path
//! defaults to `./config/server.yaml`; `RUST_LOG` overrides the configured
//! log filter.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use interest_calculator::api::{AppState, create_router};
use interest_calculator::calculation::InterestCalculator;
use interest_calculator::config::{ConfigLoader, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load_or_default(&config_path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(InterestCalculator::standard());
    let router = create_router(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(address = %listener.local_addr()?, config = %config_path, "Interest calculator listening");

    axum::serve(listener, router).await?;
    Ok(())
}
