//! Driving port for engineer mutations.

use async_trait::async_trait;

use crate::domain::{EngineerDto, EngineerId, Error};

/// Domain use-case port for creating and deleting engineers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineersCommand: Send + Sync {
    /// Store a new engineer from `payload`, ignoring any id it carries, and
    /// return it with the store-assigned id.
    async fn create(&self, payload: EngineerDto) -> Result<EngineerDto, Error>;

    /// Delete one engineer, failing with not-found when it does not exist.
    async fn delete_by_id(&self, id: EngineerId) -> Result<(), Error>;

    /// Delete every engineer. Succeeds on an empty collection.
    async fn delete_all(&self) -> Result<(), Error>;
}
