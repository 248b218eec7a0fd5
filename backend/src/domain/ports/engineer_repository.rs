//! Port abstraction for engineer persistence adapters and their errors.
//!
//! The contract mirrors a generic CRUD repository over a single table: no
//! custom queries, and a missing id is an empty result rather than an error.

use async_trait::async_trait;

use crate::domain::{Engineer, EngineerDraft, EngineerId};

/// Persistence errors raised by engineer repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineerRepositoryError {
    /// Repository connection could not be established.
    #[error("engineer repository connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("engineer repository query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl EngineerRepositoryError {
    /// Connection or pool checkout failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Failed query or mutation.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// CRUD port over stored engineers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineerRepository: Send + Sync {
    /// Return every stored engineer in insertion (id) order.
    async fn find_all(&self) -> Result<Vec<Engineer>, EngineerRepositoryError>;

    /// Fetch an engineer by identifier.
    async fn find_by_id(&self, id: EngineerId)
    -> Result<Option<Engineer>, EngineerRepositoryError>;

    /// Report whether an engineer with this identifier exists.
    async fn exists_by_id(&self, id: EngineerId) -> Result<bool, EngineerRepositoryError>;

    /// Insert a new engineer, or replace an existing one when the draft
    /// carries an id, returning the stored record.
    async fn save(&self, draft: EngineerDraft) -> Result<Engineer, EngineerRepositoryError>;

    /// Delete the engineer with this identifier. Deleting a missing id is a
    /// no-op.
    async fn delete_by_id(&self, id: EngineerId) -> Result<(), EngineerRepositoryError>;

    /// Delete every engineer, returning how many rows were removed.
    async fn delete_all(&self) -> Result<usize, EngineerRepositoryError>;
}
