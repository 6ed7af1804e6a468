/// Data structures for settings lists
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An entry of a word or website list
///
/// Ids are positional: they are assigned `index + 1` whenever a whole list is
/// loaded, and `len + 1` on add. Deleting does not renumber, so ids are only
/// stable within one loaded snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub value: String,
}

impl Record {
    pub fn new(id: u32, value: impl Into<String>) -> Record {
        Record {
            id,
            value: value.into(),
        }
    }
}

/// Sort direction of a list column
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    /// Insertion order
    #[default]
    None,
    Asc,
    Desc,
}

/// Which column is ordered and how
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnOrder {
    pub column: u32,
    pub direction: Order,
}

impl Default for ColumnOrder {
    fn default() -> Self {
        ColumnOrder {
            column: 1,
            direction: Order::None,
        }
    }
}

/// Why an add or edit was refused
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    #[error("EMPTY")]
    Empty,
    #[error("DUPLICATE")]
    Duplicate,
    #[error("INVALID_URL")]
    InvalidUrl,
}
