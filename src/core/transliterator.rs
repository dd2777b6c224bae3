//! Transliterator facade
//!
//! Owns a loaded [`ScriptTable`] and runs the three pipeline stages in
//! sequence. Every call is a pure function of the input text, the script
//! codes, and the table; the only side effect is debug logging.

use log::debug;

use crate::core::convert::convert;
use crate::core::detect::detect;
use crate::core::postprocess::postprocess;
use crate::core::preprocess::preprocess;
use crate::data::table::{ScriptTable, HUB};
use crate::utils::error::DataResult;

/// Script-to-script transliterator over an immutable table set.
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: ScriptTable,
}

impl Transliterator {
    /// Create a transliterator over the table bundled with the crate.
    pub fn new() -> DataResult<Self> {
        Ok(Self::with_table(ScriptTable::bundled()?))
    }

    /// Create a transliterator over a caller-supplied table.
    pub fn with_table(table: ScriptTable) -> Self {
        Self { table }
    }

    /// Transliterate `text` into `target` script.
    ///
    /// When `source` is `None` the dominant script of the input is
    /// detected per character. Unmapped characters pass through
    /// unchanged; this never fails.
    pub fn transliterate(&self, text: &str, source: Option<&str>, target: &str) -> String {
        let source = match source {
            Some(sc) => sc.to_string(),
            None => detect(text).to_string(),
        };
        debug!("transliterate [{} -> {}]: {:?}", source, target, text);
        let t = preprocess(text, &self.table, &source);
        let t = convert(&t, &self.table, &source, target);
        postprocess(&t, &self.table, target)
    }

    /// Transliterate into the Latin hub script.
    pub fn to_latin(&self, text: &str, source: Option<&str>) -> String {
        self.transliterate(text, source, HUB)
    }

    /// Script codes with conversion data, excluding the Latin hub.
    pub fn supported_scripts(&self) -> Vec<&str> {
        self.table.supported_scripts()
    }

    /// The table this transliterator operates on.
    pub fn table(&self) -> &ScriptTable {
        &self.table
    }
}
