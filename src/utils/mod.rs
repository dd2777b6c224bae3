//! Utility modules
//!
//! - Error types and result types for table loading
//! - Unicode character classification shared by the pipeline stages

pub mod error;
pub mod unicode;

// Re-export commonly used items
pub use error::{DataError, DataResult};
pub use unicode::{is_letter, is_mark};
