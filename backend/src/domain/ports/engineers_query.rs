//! Driving port for engineer reads.
//!
//! Inbound adapters use this port to fetch transfer objects without importing
//! outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{EngineerDto, EngineerId, Error};

/// Domain use-case port for reading engineers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineersQuery: Send + Sync {
    /// Return every engineer.
    ///
    /// An empty collection is reported as [`crate::domain::ErrorCode::NotFound`]
    /// rather than an empty list.
    async fn list_all(&self) -> Result<Vec<EngineerDto>, Error>;

    /// Return a single engineer or a not-found error.
    async fn get_by_id(&self, id: EngineerId) -> Result<EngineerDto, Error>;
}
