//! Error types raised by validators and tabular coercion adapters.

use std::fmt;
use thiserror::Error;

/// What a validated field is allowed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Str,
    Bool,
    Mode,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Str => write!(f, "a string"),
            Expected::Bool => write!(f, "a boolean"),
            Expected::Mode => write!(f, r#"either "lines", "markers" or "lines+markers""#),
        }
    }
}

/// A setting was rejected by one of the validators in [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is expected to be {expected}")]
pub struct ValidationError {
    pub field: String,
    pub expected: Expected,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, expected: Expected) -> Self {
        Self {
            field: field.into(),
            expected,
        }
    }
}

/// Input could not be coerced into a [`crate::models::Table`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("column `{column}` has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("index has {found} entries but the table has {expected} rows")]
    IndexLength { expected: usize, found: usize },
    #[error("value `{value}` in column `{column}` is not numeric")]
    NotNumeric { column: String, value: String },
    #[error("no column named `{0}`")]
    UnknownColumn(String),
    #[error("unsupported data shape: {0}")]
    Shape(String),
}
