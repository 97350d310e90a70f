use sa_server::{ServerState, build_router, logger};
use sa_ws::ShutdownCoordinator;

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

/// Upper bound on how long sessions get to close after the listener stops
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env with SA_* overrides
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = sa_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let shutdown = ShutdownCoordinator::new();
    let state = ServerState::from_config(&config, shutdown.clone());
    let registry = state.app.broker.registry().clone();

    let app = build_router(state);

    // Bind failure is fatal
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Listener stopped, closing sessions");
        })
        .await?;

    // Sessions saw the same signal; give them a bounded window to deregister
    match tokio::time::timeout(DRAIN_TIMEOUT, registry.wait_until_empty()).await {
        Ok(()) => info!("All sessions closed, shutdown complete"),
        Err(_) => warn!(
            "{} sessions still open after {:?}, exiting anyway",
            registry.total_count(),
            DRAIN_TIMEOUT
        ),
    }

    Ok(())
}
