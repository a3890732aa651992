//! Main entry point for the BakeOps server.
//!
//! Wires the edit-lock service, the background expiry sweeper, the order
//! lifecycle coordinator and the HTTP server together.

use std::sync::Arc;

use bakeops_lifecycle::LifecycleCoordinator;
use bakeops_lock::{LockService, LockSweeper};
use bakeops_server::{
    model::{AppState, Configuration},
    service::InMemoryOrderStore,
    startup,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = Configuration::new();
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let server_context_path = configuration.server_context_path();
    let lock_config = configuration.lock_config();

    info!(
        ttl_seconds = lock_config.ttl.as_secs(),
        sweep_interval_seconds = lock_config.sweep_interval.as_secs(),
        "Edit-lock configuration loaded"
    );

    let lock_service = Arc::new(LockService::new(&lock_config));
    let sweeper = LockSweeper::new(lock_service.registry(), lock_config.sweep_interval);
    sweeper.start();

    let order_store = InMemoryOrderStore::new();
    let coordinator = Arc::new(LifecycleCoordinator::new(
        lock_service.clone(),
        Arc::new(order_store.clone()),
    ));

    let app_state = Arc::new(AppState { configuration });

    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let mut shutdown_rx = shutdown_signal.subscribe();

    info!("Starting server on {}:{}", server_address, server_port);
    let server = startup::main_server(
        app_state,
        lock_service,
        coordinator,
        order_store,
        server_context_path,
        server_address,
        server_port,
    )?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_rx.recv() => {
            info!("Server shutting down gracefully");
        }
    }

    sweeper.stop();
    Ok(())
}
