use std::error::Error;

use shift_engine::api::{AppState, create_router};
use shift_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "./config/scheduling.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "shift_engine=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("SHIFT_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let config = ConfigLoader::load(&config_path)?.into_config();
    tracing::info!(
        path = %config_path,
        check_adjacent_dates = config.overlap.check_adjacent_dates,
        allow_zero_length = config.overlap.allow_zero_length,
        max_override_hours = %config.overrides.max_hours,
        "Configuration loaded"
    );

    let addr = std::env::var("SHIFT_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Starting shift engine");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
