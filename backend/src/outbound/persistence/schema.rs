//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Software engineer records.
    ///
    /// The `id` column is a `SERIAL` primary key assigned by PostgreSQL.
    software_engineer (id) {
        /// Primary key drawn from the table sequence.
        id -> Int4,
        /// Engineer name.
        name -> Varchar,
        /// Technology stack description.
        tech_stack -> Varchar,
    }
}
