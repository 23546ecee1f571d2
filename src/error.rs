use thiserror::Error;

use crate::table::Attribute;

/// Error types for the paramtable-rs library.
///
/// Only failures that abort an operation live here. Problems that leave the
/// table unchanged (bad addresses, rejected cells, rejected ties) are reported
/// through [`crate::table::WriteReport`] instead.
#[derive(Error, Debug)]
pub enum TableError {
    /// Malformed construction input: empty, duplicate or mis-paired names.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A whole-attribute sequence whose length does not match the parameter count.
    #[error("Shape error: list for column {attribute} must have one entry per parameter ({expected}), got {got}")]
    Shape {
        attribute: Attribute,
        expected: usize,
        got: usize,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for paramtable-rs operations.
pub type Result<T> = std::result::Result<T, TableError>;
