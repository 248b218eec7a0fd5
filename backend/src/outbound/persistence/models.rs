//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{Engineer, EngineerId};

use super::schema::software_engineer;

/// Row struct for reading from the software_engineer table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = software_engineer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EngineerRow {
    pub id: i32,
    pub name: String,
    pub tech_stack: String,
}

impl From<EngineerRow> for Engineer {
    fn from(row: EngineerRow) -> Self {
        Engineer::new(EngineerId::new(row.id), row.name, row.tech_stack)
    }
}

/// Insertable struct for new rows; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = software_engineer)]
pub(crate) struct NewEngineerRow<'a> {
    pub name: &'a str,
    pub tech_stack: &'a str,
}

/// Insertable struct for writing a row under an explicit id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = software_engineer)]
pub(crate) struct EngineerRowWithId<'a> {
    pub id: i32,
    pub name: &'a str,
    pub tech_stack: &'a str,
}

/// Changeset struct for replacing an existing row.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = software_engineer)]
pub(crate) struct EngineerUpdate<'a> {
    pub name: &'a str,
    pub tech_stack: &'a str,
}
