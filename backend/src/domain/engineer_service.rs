//! Engineer domain service.
//!
//! Implements the engineer driving ports on top of an [`EngineerRepository`],
//! converting stored records into transfer objects and raising not-found
//! errors for missing engineers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    EngineerRepository, EngineerRepositoryError, EngineersCommand, EngineersQuery,
};
use crate::domain::{EngineerDto, EngineerId, Error};

fn map_repository_error(error: EngineerRepositoryError) -> Error {
    error!(%error, "engineer repository failure");
    match error {
        EngineerRepositoryError::Connection { message } => {
            Error::internal(format!("engineer repository unavailable: {message}"))
        }
        EngineerRepositoryError::Query { message } => {
            Error::internal(format!("engineer repository error: {message}"))
        }
    }
}

/// Engineer service implementing both the query and command driving ports.
#[derive(Clone)]
pub struct EngineerService<R> {
    engineer_repo: Arc<R>,
}

impl<R> EngineerService<R> {
    /// Create a new service backed by the engineer repository.
    pub fn new(engineer_repo: Arc<R>) -> Self {
        Self { engineer_repo }
    }
}

#[async_trait]
impl<R> EngineersQuery for EngineerService<R>
where
    R: EngineerRepository,
{
    async fn list_all(&self) -> Result<Vec<EngineerDto>, Error> {
        let engineers = self
            .engineer_repo
            .find_all()
            .await
            .map_err(map_repository_error)?;

        // An empty collection is reported as missing, not as `[]`.
        if engineers.is_empty() {
            return Err(Error::no_engineers());
        }
        Ok(engineers.into_iter().map(EngineerDto::from).collect())
    }

    async fn get_by_id(&self, id: EngineerId) -> Result<EngineerDto, Error> {
        self.engineer_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .map(EngineerDto::from)
            .ok_or_else(|| Error::engineer_not_found(id))
    }
}

#[async_trait]
impl<R> EngineersCommand for EngineerService<R>
where
    R: EngineerRepository,
{
    async fn create(&self, payload: EngineerDto) -> Result<EngineerDto, Error> {
        let saved = self
            .engineer_repo
            .save(payload.into_new_draft())
            .await
            .map_err(map_repository_error)?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: EngineerId) -> Result<(), Error> {
        let exists = self
            .engineer_repo
            .exists_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !exists {
            return Err(Error::engineer_not_found(id));
        }
        self.engineer_repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.engineer_repo
            .delete_all()
            .await
            .map(|_| ())
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "engineer_service_tests.rs"]
mod tests;
