//! Software engineer record and its API-facing transfer object.
//!
//! [`Engineer`] is the stored representation handed out by repositories.
//! [`EngineerDto`] is the shape exposed over HTTP; it exists separately so
//! storage concerns never leak across the API boundary.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned engineer identifier.
///
/// Identifiers come from the store on creation and are never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct EngineerId(i32);

impl EngineerId {
    /// Wrap a raw identifier.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for EngineerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for EngineerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EngineerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self)
    }
}

/// Persisted software engineer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engineer {
    /// Store-assigned identifier.
    pub id: EngineerId,
    /// Engineer name.
    pub name: String,
    /// Free-form description of the engineer's technology stack.
    pub tech_stack: String,
}

impl Engineer {
    /// Build an engineer from its parts.
    pub fn new(id: EngineerId, name: impl Into<String>, tech_stack: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tech_stack: tech_stack.into(),
        }
    }
}

/// Input to a repository `save`.
///
/// Without an id the store inserts a new row and assigns the id. With an id
/// the row is inserted or fully replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineerDraft {
    /// Existing identifier to replace, or `None` to insert.
    pub id: Option<EngineerId>,
    /// Engineer name.
    pub name: String,
    /// Technology stack description.
    pub tech_stack: String,
}

impl EngineerDraft {
    /// Draft for a brand new engineer.
    pub fn new(name: impl Into<String>, tech_stack: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            tech_stack: tech_stack.into(),
        }
    }
}

/// API-facing engineer payload.
///
/// Used both as the response body and as the `POST` request body. Any `id`
/// sent by a client is ignored on creation.
///
/// Example JSON:
/// `{"id":1,"name":"Ada","techStack":"C"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngineerDto {
    /// Store-assigned identifier; absent in create requests.
    #[schema(value_type = Option<i32>, example = 1)]
    pub id: Option<EngineerId>,
    /// Engineer name.
    #[schema(example = "Ada")]
    pub name: String,
    /// Technology stack description.
    #[schema(example = "C")]
    pub tech_stack: String,
}

impl From<Engineer> for EngineerDto {
    fn from(value: Engineer) -> Self {
        let Engineer {
            id,
            name,
            tech_stack,
        } = value;
        Self {
            id: Some(id),
            name,
            tech_stack,
        }
    }
}

impl EngineerDto {
    /// Draft for inserting this payload as a new engineer, dropping any id.
    pub fn into_new_draft(self) -> EngineerDraft {
        EngineerDraft::new(self.name, self.tech_stack)
    }
}
