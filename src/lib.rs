//! # semitra
//!
//! Rule-table driven transliteration between Semitic-family scripts.
//!
//! Semitra converts text between writing systems (Hebrew, Arabic, Syriac,
//! Phoenician, Imperial Aramaic, Samaritan, Greek) using a precomputed
//! table of character mappings with Latin as the hub script, plus a small
//! set of context-sensitive rewrites: final-letter forms and ligatures.
//! It is a best-effort, abjad-level romanizer, not an implementation of a
//! transliteration standard: vowel points and diacritics are stripped,
//! and anything the tables cannot map passes through unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use semitra::Transliterator;
//!
//! let tr = Transliterator::new().unwrap();
//!
//! // script is detected when not given
//! assert_eq!(tr.transliterate("שלום", None, "Latn"), "šlwm");
//!
//! // any pair of supported scripts works via the Latin hub
//! assert_eq!(tr.transliterate("שלום", Some("Hebr"), "Arab"), "شلوم");
//! ```
//!
//! Conversion is total: it never fails mid-stream. The only fallible
//! operation is table loading, which returns a [`DataError`] when the
//! data document is malformed or missing one of its five categories.

/// Core pipeline: detection, pre/convert/post stages, facade
pub mod core;

/// Data layer: conversion tables and the bundled data document
pub mod data;

/// Utility modules
pub mod utils;

// Re-export the public surface
pub use core::detect::detect;
pub use core::transliterator::Transliterator;
pub use data::table::{RuleMap, ScriptTable, HUB, UNKNOWN};
pub use utils::error::{DataError, DataResult};

#[cfg(feature = "compiler")]
pub use data::compiler::compile_tsv;

/// Transliterate `text` with the bundled table.
///
/// Loads the bundled table on every call; hold a [`Transliterator`] when
/// converting more than once. `source` of `None` triggers script
/// detection; `target` is typically [`HUB`].
pub fn transliterate(text: &str, source: Option<&str>, target: &str) -> DataResult<String> {
    let tr = Transliterator::new()?;
    Ok(tr.transliterate(text, source, target))
}
