//! # instockd
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`instock.toml` plus environment overrides)
//! - Initialise `tracing` with the configured filter
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use instock_adapter_http_axum::router;
use instock_adapter_http_axum::state::AppState;
use instock_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteInventoryRepository, SqliteWarehouseRepository,
};
use instock_app::services::inventory_service::InventoryService;
use instock_app::services::warehouse_service::WarehouseService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let warehouse_repo = SqliteWarehouseRepository::new(pool.clone());
    let inventory_repo = SqliteInventoryRepository::new(pool);

    // Services
    let warehouse_service = WarehouseService::new(warehouse_repo.clone(), inventory_repo.clone());
    let inventory_service = InventoryService::new(inventory_repo, warehouse_repo);

    // HTTP
    let state = AppState::new(warehouse_service, inventory_service);
    let app = router::build(state, router::cors_layer(config.cors_origin())?);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "instockd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("instockd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
