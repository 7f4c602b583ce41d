//! Wire DTOs for the floor and table endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renames and
//! decoded values can flow straight into page state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-defined floor label (e.g. `"Main"`, `"Patio"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorName(pub String);

impl fmt::Display for FloorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FloorName {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A named seating area, as returned by `GET /floors`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: i64,
    pub name: FloorName,
}

/// A dining table on one floor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Backend primary key.
    pub id: i64,
    /// Display label (e.g. `"T5"`).
    pub table_name: String,
    /// Start of the current or next seating, as sent by the backend.
    pub start_time: String,
    /// End of the current or next seating.
    pub end_time: String,
    /// Guests currently seated.
    pub seats_count: i64,
    /// Maximum guests the table accommodates.
    pub capacity: i64,
    /// Whether the table is free for seating right now.
    pub is_ready: bool,
}

/// Paginated envelope of `GET /tables?floor=<id>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesResponse {
    pub results: Vec<Table>,
}
