//! HTTP inbound adapter exposing REST endpoints.

pub mod cors;
pub mod engineers;
pub mod error;
pub mod greeting;
pub mod health;
pub mod state;

pub use error::ApiResult;
