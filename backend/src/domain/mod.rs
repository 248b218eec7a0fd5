//! Domain primitives, ports, and services.
//!
//! Purpose: define the engineer record and transfer object, the repository
//! and use-case ports, and the service that ties them together. Nothing in
//! this module knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - Engineer / EngineerDraft / EngineerId: stored record and its inputs.
//! - EngineerDto: API-facing transfer object.
//! - EngineerService: implements `EngineersQuery` and `EngineersCommand`.

pub mod engineer;
pub mod engineer_service;
pub mod error;
pub mod ports;

pub use self::engineer::{Engineer, EngineerDraft, EngineerDto, EngineerId};
pub use self::engineer_service::EngineerService;
pub use self::error::{Error, ErrorCode};
