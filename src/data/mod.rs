//! Data layer - conversion tables and the bundled data document
//!
//! The table set is loaded once and treated as read-only configuration;
//! there is no process-wide singleton. Multiple [`table::ScriptTable`]
//! instances may coexist, each owned by its transliterator.

pub mod table;

#[cfg(feature = "compiler")]
pub mod compiler;

// Re-export commonly used items
pub use table::{RuleMap, ScriptTable, HUB, REQUIRED_TABLES, UNKNOWN};

#[cfg(feature = "compiler")]
pub use compiler::compile_tsv;
