//! Core transliteration pipeline
//!
//! Control flow: facade → (optional) detection → pre-process → convert →
//! post-process. Each stage is a pure function over text and the loaded
//! table; there is no branching back and no I/O inside the pipeline.
//!
//! - `detect`: per-character Unicode script tally
//! - `preprocess`: pre-composition rules, NFD, combining-mark stripping
//! - `convert`: direct / Latin-hub / simplify-and-retry resolution
//! - `postprocess`: word-final forms, then ligatures
//! - `transliterator`: the facade owning the table set

pub mod convert;
pub mod detect;
pub mod postprocess;
pub mod preprocess;
pub mod transliterator;

// Re-export main types and functions
pub use convert::convert;
pub use detect::detect;
pub use postprocess::postprocess;
pub use preprocess::preprocess;
pub use transliterator::Transliterator;
