//! mission-hub server entry point.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mission_hub::adapters::http::api_router;
use mission_hub::adapters::{postgres, InMemoryEntityStore};
use mission_hub::application::SeedDirectoryHandler;
use mission_hub::config::AppConfig;
use mission_hub::ports::EntityStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr()?;

    let (store, pool) = if config.database.is_configured() {
        let pool = postgres::connect(&config.database).await?;
        if config.database.run_migrations {
            postgres::run_migrations(&pool).await?;
        }
        if let Some(path) = config.seed.path() {
            warn!(path, "Seed file ignored when a database is configured");
        }
        (postgres::entity_store(pool.clone()), Some(pool))
    } else {
        warn!("No database configured, using the in-memory store");
        let backend = Arc::new(InMemoryEntityStore::new());
        match config.seed.load_directory()? {
            Some(seed) => {
                SeedDirectoryHandler::new(backend.clone()).handle(&seed).await?;
            }
            None => warn!(
                "No seed file configured; ApplyMission and UserSkill/Add will report \
                 unknown users and skills until MISSION_HUB__SEED__PATH is set"
            ),
        }
        (EntityStore::from_backend(backend), None)
    };

    let app = api_router(store, &config);

    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        delete_policy = %config.workflow.mission_delete_policy,
        "mission-hub listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }
    info!("Shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
