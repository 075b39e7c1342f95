use anyhow::Result;
use tracing::{info, warn};

use streak_infrastructure::config::ServerConfig;
use streak_infrastructure::logging::init_logger;
use streak_lib::presentation::{bootstrap, server};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    if let Err(e) = init_logger(config.log_dir.as_deref(), config.log_level) {
        // File logging unavailable; keep stdout logging alive
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_str())),
            )
            .try_init();
        warn!("Failed to initialize file logger: {e:#}");
    }

    config.log_summary();

    info!("🔧 Initializing streak tracker...");
    let state = bootstrap::build_app_state(&config);

    server::serve(&config, state).await
}
