//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::inbound::http::cors::CorsPolicy;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors: CorsPolicy,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration binding to `bind_addr` with the default origin policy
    /// and the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            cors: CorsPolicy::default(),
            db_pool: None,
        }
    }

    /// Replace the cross-origin policy for `/api`.
    #[must_use]
    pub fn with_cors(mut self, cors: CorsPolicy) -> Self {
        self.cors = cors;
        self
    }

    /// Attach a database connection pool.
    ///
    /// When provided, engineers are stored in PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured cross-origin policy.
    #[must_use]
    pub fn cors(&self) -> &CorsPolicy {
        &self.cors
    }
}
