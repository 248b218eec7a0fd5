//! Service entry-point: loads settings, picks the store, and serves HTTP.

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use engineers::inbound::http::health::HealthState;
use engineers::outbound::persistence::{DbPool, run_pending_migrations};
use engineers::server::{AppSettings, ServerConfig, create_server, drain_on_shutdown};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let cors = settings.cors_policy().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr).with_cors(cors);
    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations {
            let applied = run_pending_migrations(pool_config.database_url())
                .await
                .map_err(io::Error::other)?;
            info!(applied, "database migrations applied");
        }
        let pool = DbPool::new(pool_config)
            .await
            .map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(drain_on_shutdown(
        tokio::signal::ctrl_c(),
        health_state,
        move || async move { handle.stop(true).await },
    ));
    server.await
}
