//! Shared helpers for integration suites backed by embedded PostgreSQL.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! cluster bootstrap and skip policy live here rather than in each suite.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
