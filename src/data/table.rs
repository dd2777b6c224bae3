//! Script table: the five lookup structures driving the pipeline
//!
//! A [`ScriptTable`] is loaded once, either from the bundled data document
//! or from caller-supplied JSON, and is read-only for the rest of the
//! process lifetime. Scripts are identified by 4-letter ISO 15924 codes
//! (`"Hebr"`, `"Arab"`, `"Latn"`, ...). All maps are insertion-ordered
//! ([`IndexMap`]): rule application order is part of the table's contract,
//! so rules must never be reordered or alphabetized on load.
//!
//! Absence of a specific character mapping is a legitimate miss that the
//! conversion stage resolves by falling through to the Latin hub or to
//! identity. Absence of a whole table category is fatal misconfiguration
//! and fails at load time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::error::{DataError, DataResult};

/// The Latin hub script used for indirect conversion.
pub const HUB: &str = "Latn";

/// Fallback code for text whose script cannot be determined.
pub const UNKNOWN: &str = "Zyyy";

/// An insertion-ordered string-to-string rule map.
pub type RuleMap = IndexMap<String, String>;

/// The five table categories required of every data document, in the
/// order they appear in the bundled file.
pub const REQUIRED_TABLES: [&str; 5] = ["ccmp", "ssub", "simp", "fina", "liga"];

static BUNDLED_DATA: &str = include_str!("semitra_data.json");

/// Immutable conversion table set.
///
/// * `ssub` — source script → target script → character → replacement
/// * `ccmp` — per-script pre-composition rules applied before NFD
/// * `simp` — global Latin simplification fallback
/// * `fina` — per-script word-final allomorphs
/// * `liga` — per-script ligature rewrites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptTable {
    pub(crate) ccmp: IndexMap<String, RuleMap>,
    pub(crate) ssub: IndexMap<String, IndexMap<String, RuleMap>>,
    pub(crate) simp: RuleMap,
    pub(crate) fina: IndexMap<String, RuleMap>,
    pub(crate) liga: IndexMap<String, RuleMap>,
}

impl ScriptTable {
    /// Parse a table document from JSON.
    ///
    /// Fails if the document is not valid JSON or if any of the five
    /// required categories (`ssub`, `ccmp`, `simp`, `fina`, `liga`) is
    /// missing. The category check runs first so the error names the
    /// missing table rather than a generic deserialization failure.
    ///
    /// The intermediate `Value` relies on serde_json's `preserve_order`
    /// feature: rule application order is part of the table contract, so
    /// the document must survive the detour unsorted.
    pub fn from_json(source: &str) -> DataResult<Self> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let doc = value
            .as_object()
            .ok_or_else(|| DataError::parse("top-level value must be an object"))?;
        for name in REQUIRED_TABLES {
            if !doc.contains_key(name) {
                return Err(DataError::missing_table(name));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Load the table bundled with the crate.
    pub fn bundled() -> DataResult<Self> {
        Self::from_json(BUNDLED_DATA)
    }

    /// Direct lookup: `ssub[from][to][key]`.
    pub fn direct(&self, from: &str, to: &str, key: &str) -> Option<&str> {
        self.ssub.get(from)?.get(to)?.get(key).map(String::as_str)
    }

    /// Hub leg one: `ssub[from]["Latn"][key]`.
    pub fn to_latin(&self, from: &str, key: &str) -> Option<&str> {
        self.direct(from, HUB, key)
    }

    /// Hub leg two: `ssub["Latn"][to][key]`.
    pub fn from_latin(&self, to: &str, key: &str) -> Option<&str> {
        self.direct(HUB, to, key)
    }

    /// Global Latin simplification: `simp[key]`.
    pub fn simplify(&self, key: &str) -> Option<&str> {
        self.simp.get(key).map(String::as_str)
    }

    /// Pre-composition rules for a script, in table order.
    pub fn compositions(&self, script: &str) -> impl Iterator<Item = (&str, &str)> {
        rules(self.ccmp.get(script))
    }

    /// Final-form rules for a script, in table order.
    pub fn finals(&self, script: &str) -> impl Iterator<Item = (&str, &str)> {
        rules(self.fina.get(script))
    }

    /// Ligature rules for a script, in table order.
    pub fn ligatures(&self, script: &str) -> impl Iterator<Item = (&str, &str)> {
        rules(self.liga.get(script))
    }

    /// All source script codes in the substitution table, in table order.
    /// Includes the Latin hub.
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.ssub.keys().map(String::as_str)
    }

    /// Script codes with conversion data, excluding the Latin hub.
    pub fn supported_scripts(&self) -> Vec<&str> {
        self.scripts().filter(|sc| *sc != HUB).collect()
    }
}

fn rules(map: Option<&RuleMap>) -> impl Iterator<Item = (&str, &str)> {
    map.into_iter()
        .flatten()
        .map(|(k, v)| (k.as_str(), v.as_str()))
}
