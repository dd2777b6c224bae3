//! Error handling for table loading
//!
//! Conversion itself is total and never fails; the only fallible operation
//! in the crate is loading (or compiling) a script table. This module
//! provides the error and result types for that boundary.

use std::fmt;

/// Error raised while loading or building a script table
#[derive(Debug, Clone)]
pub enum DataError {
    /// The table document could not be parsed
    Parse { message: String },
    /// One of the five required table categories is absent
    MissingTable { name: String },
    /// IO error (for file operations)
    Io { message: String },
    /// Malformed source record (table compiler)
    BadRecord { message: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Parse { message } => {
                write!(f, "Failed to parse table data: {}", message)
            }
            DataError::MissingTable { name } => {
                write!(f, "Table data is missing the required '{}' category", name)
            }
            DataError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            DataError::BadRecord { message } => {
                write!(f, "Malformed source record: {}", message)
            }
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type for table loading operations
pub type DataResult<T> = Result<T, DataError>;

// Convenience constructors
impl DataError {
    pub fn parse(message: impl Into<String>) -> Self {
        DataError::Parse {
            message: message.into(),
        }
    }

    pub fn missing_table(name: impl Into<String>) -> Self {
        DataError::MissingTable { name: name.into() }
    }

    pub fn bad_record(message: impl Into<String>) -> Self {
        DataError::BadRecord {
            message: message.into(),
        }
    }
}
