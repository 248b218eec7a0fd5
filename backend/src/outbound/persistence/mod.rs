//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the engineer repository
//! port backed by PostgreSQL via Diesel with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel models
//!   and domain types.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel errors are mapped to
//!   [`crate::domain::ports::EngineerRepositoryError`].
//!
//! # Example
//!
//! ```no_run
//! use engineers::outbound::persistence::{DbPool, DieselEngineerRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), engineers::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/engineers")).await?;
//! let repo = DieselEngineerRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_engineer_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_engineer_repository::DieselEngineerRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
