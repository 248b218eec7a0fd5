//! Domain ports and supporting types for the hexagonal boundary.

mod engineer_repository;
mod engineers_command;
mod engineers_query;

#[cfg(test)]
pub use engineer_repository::MockEngineerRepository;
pub use engineer_repository::{EngineerRepository, EngineerRepositoryError};
#[cfg(test)]
pub use engineers_command::MockEngineersCommand;
pub use engineers_command::EngineersCommand;
#[cfg(test)]
pub use engineers_query::MockEngineersQuery;
pub use engineers_query::EngineersQuery;
