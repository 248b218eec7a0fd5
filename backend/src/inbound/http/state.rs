//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EngineersCommand, EngineersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side engineer use-cases.
    pub engineers: Arc<dyn EngineersQuery>,
    /// Write-side engineer use-cases.
    pub engineers_command: Arc<dyn EngineersCommand>,
}

impl HttpState {
    /// Construct state from separate query and command ports.
    pub fn new(
        engineers: Arc<dyn EngineersQuery>,
        engineers_command: Arc<dyn EngineersCommand>,
    ) -> Self {
        Self {
            engineers,
            engineers_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use engineers::domain::EngineerService;
    /// use engineers::inbound::http::state::HttpState;
    /// use engineers::outbound::InMemoryEngineerRepository;
    ///
    /// let service = EngineerService::new(Arc::new(InMemoryEngineerRepository::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _query = state.engineers.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: EngineersQuery + EngineersCommand + 'static,
    {
        Self {
            engineers: service.clone(),
            engineers_command: service,
        }
    }
}
