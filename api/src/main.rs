use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use ids_api::app::{create_app, memory_user_store};
use ids_api::routes::auth::AppState;
use ids_api::{config, telemetry};
use ids_core::repositories::{InMemoryRevocationRepository, RevocationRepository, UserRepository};
use ids_core::services::{
    AuthService, BcryptPasswordVerifier, Clock, RevocationCleanupConfig, RevocationCleanupService,
    SystemClock, TokenCodec, TokenServiceConfig,
};
use ids_infra::database::{DatabasePool, MySqlRevocationRepository, MySqlUserRepository};
use ids_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;
    telemetry::init_telemetry(&config.logging)?;

    info!(environment = %config.environment, "Starting identity service");

    if config.auth.jwt.is_using_default_secret() {
        warn!("Using the built-in development signing key");
    }

    let codec = TokenCodec::new(&TokenServiceConfig::from(&config.auth.jwt))?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match config.database.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory stores: revocations are lost on restart");
            if config.auth.users.is_empty() {
                warn!("No users configured under auth.users; every login will fail");
            } else {
                info!(count = config.auth.users.len(), "Loaded users from configuration");
            }
            let users = Arc::new(memory_user_store(&config.auth));
            let revocations = Arc::new(InMemoryRevocationRepository::new());
            serve(&config, users, revocations, codec, clock).await
        }
        StorageBackend::MySql => {
            let pool = DatabasePool::new(&config.database).await?;
            pool.run_migrations().await?;

            let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            let revocations = Arc::new(MySqlRevocationRepository::new(pool.get_pool().clone()));
            let result = serve(&config, users, revocations, codec, clock).await;

            pool.close().await;
            result
        }
    }
}

async fn serve<U, R>(
    config: &AppConfig,
    users: Arc<U>,
    revocations: Arc<R>,
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
{
    let cleanup = Arc::new(RevocationCleanupService::new(
        revocations.clone(),
        clock.clone(),
        RevocationCleanupConfig::from(&config.auth.cleanup),
    ));
    let cleanup_task = cleanup.start_background_task();

    let auth_service = Arc::new(AuthService::new(
        users,
        revocations,
        codec,
        Arc::new(BcryptPasswordVerifier),
        clock,
    ));
    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    info!(%bind_address, "HTTP server listening");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    // Zero keeps the actix default of one worker per core
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    if let Some(task) = cleanup_task {
        task.abort();
    }

    info!("Identity service stopped");
    Ok(())
}
