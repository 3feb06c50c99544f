use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, PostgresUserRepository, UserService};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Select the store: PostgreSQL when DATABASE_URL is set, in-memory otherwise
    let (api_routes, db) = match &config.database {
        Some(database_config) => {
            let db = database::postgres::connect_with_retry(&database_config.url, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            let service = UserService::new(PostgresUserRepository::new(db.clone()));
            (api::routes(service), Some(db))
        }
        None => {
            warn!("DATABASE_URL not set, falling back to the in-memory user store");

            let service = UserService::new(InMemoryUserRepository::new());
            (api::routes(service), None)
        }
    };

    // create_router adds docs, the 404 fallback and middleware to our routes
    let app = create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router(config.app))
        .merge(api::ready_router(db.clone()));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    // Server with graceful shutdown; the connection closes during cleanup
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = db {
                match db.close().await {
                    Ok(_) => info!("PostgreSQL connection closed"),
                    Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("user-api shutdown complete");
    Ok(())
}
