use fr_server::{AppState, build_repository, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Load and validate configuration
    let config = fr_config::Config::load()?;
    config.validate()?;

    // Ensure the log directory exists before fern opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fr-server v{}", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }
    config.log_summary();

    let repository = build_repository(&config).await?;
    let app = build_router(AppState::new(repository, config.storage.backend));

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Port 0 is resolved by the OS
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Graceful shutdown unavailable; waiting indefinitely");
            std::future::pending::<()>().await;
        }
    }
}
