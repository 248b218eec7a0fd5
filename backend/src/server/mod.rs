//! Server construction and middleware wiring.
//!
//! The route table is assembled explicitly here:
//!
//! ```text
//! GET    /                          greeting
//! GET    /health/ready              readiness probe
//! GET    /health/live               liveness probe
//! *      /api/v1/engineers/**       engineers API (CORS applied to /api)
//! GET    /docs, /api-docs/...       Swagger UI (debug builds)
//! GET    /metrics                   Prometheus (metrics feature)
//! ```

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub use metrics::{METRICS_PATH, build_metrics};
pub use settings::{AppSettings, SettingsError};

use std::future::Future;
use std::io;
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::EngineerService;
use crate::domain::ports::EngineerRepository;
use crate::inbound::http::cors::CorsPolicy;
use crate::inbound::http::engineers;
use crate::inbound::http::error::{method_not_allowed, route_not_found};
use crate::inbound::http::greeting::greeting;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::state::HttpState;
use crate::outbound::InMemoryEngineerRepository;
use crate::outbound::persistence::DieselEngineerRepository;

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Probe flags.
    pub health_state: web::Data<HealthState>,
    /// Engineer use-cases.
    pub http_state: web::Data<HttpState>,
    /// Cross-origin policy for `/api`.
    pub cors: CorsPolicy,
}

impl AppDependencies {
    /// Dependencies backed by a fresh in-memory store.
    pub fn in_memory(cors: CorsPolicy) -> Self {
        Self {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(http_state_for(InMemoryEngineerRepository::new())),
            cors,
        }
    }
}

fn http_state_for<R>(repository: R) -> HttpState
where
    R: EngineerRepository + 'static,
{
    HttpState::from_service(Arc::new(EngineerService::new(Arc::new(repository))))
}

/// Choose the store from configuration: PostgreSQL when a pool is
/// configured, memory otherwise.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("engineers stored in PostgreSQL");
            http_state_for(DieselEngineerRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; engineers are kept in memory and lost on restart");
            http_state_for(InMemoryEngineerRepository::new())
        }
    };
    web::Data::new(state)
}

/// Assemble the application with the full route table and middleware.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors,
    } = deps;

    let api = web::scope("/api")
        .wrap(cors.middleware())
        .service(web::scope("/v1/engineers").configure(engineers::configure));

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(NormalizePath::trim())
        .wrap(Trace)
        .service(
            web::resource("/")
                .route(web::get().to(greeting))
                .default_service(web::to(method_not_allowed)),
        )
        .configure(health::configure)
        .service(api)
        .default_service(web::to(route_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is bound.
/// - `config`: pre-built [`ServerConfig`] with binding, origin policy, and
///   optional database pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    info!(
        bind_addr = %config.bind_addr(),
        allowed_origin = config.cors().allowed_origin(),
        "configuring server"
    );
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        cors,
        db_pool: _,
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = build_metrics()?;

    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        cors,
    };
    let server = HttpServer::new(move || {
        let app = build_app(deps.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

/// Wait for `shutdown`, then fail liveness and stop the server gracefully.
///
/// Liveness reports 503 before `stop` runs. A failed shutdown listener leaves
/// the server untouched.
pub async fn drain_on_shutdown<S, F, Fut>(
    shutdown: S,
    health_state: web::Data<HealthState>,
    stop: F,
) where
    S: Future<Output = io::Result<()>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    match shutdown.await {
        Ok(()) => {
            info!("shutdown requested; draining");
            health_state.mark_unhealthy();
            stop().await;
        }
        Err(error) => warn!(%error, "shutdown listener failed"),
    }
}

#[cfg(test)]
mod tests {
    //! Shutdown draining behaviour.
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[actix_web::test]
    async fn shutdown_fails_liveness_then_stops() {
        let health_state = web::Data::new(HealthState::new());
        let stopped = Arc::new(AtomicBool::new(false));
        let observed = stopped.clone();
        let liveness = health_state.clone();

        drain_on_shutdown(async { Ok(()) }, health_state, move || async move {
            assert!(!liveness.is_alive());
            observed.store(true, Ordering::SeqCst);
        })
        .await;

        assert!(stopped.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn failed_listener_keeps_server_alive() {
        let health_state = web::Data::new(HealthState::new());
        let stopped = Arc::new(AtomicBool::new(false));
        let observed = stopped.clone();

        drain_on_shutdown(
            async { Err(io::Error::other("no signal handler")) },
            health_state.clone(),
            move || async move { observed.store(true, Ordering::SeqCst) },
        )
        .await;

        assert!(health_state.is_alive());
        assert!(!stopped.load(Ordering::SeqCst));
    }
}
