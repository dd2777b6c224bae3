//! Pre-processing stage
//!
//! Canonicalizes input before character conversion:
//!
//! 1. Pre-composition rules (`ccmp`) for the source script, applied as
//!    literal substring replacements in table order, so later rules see
//!    the output of earlier ones. These collapse encodings of the source
//!    text (presentation forms, digraph ligatures) into the canonical
//!    form the conversion table is authored against.
//! 2. Canonical decomposition (NFD).
//! 3. Stripping of all combining marks. Conversion tables operate at the
//!    consonantal base-letter level, so vowel points and diacritics are
//!    discarded.

use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::data::table::ScriptTable;
use crate::utils::unicode::is_mark;

/// Normalize `text` for conversion out of `source`.
pub fn preprocess(text: &str, table: &ScriptTable, source: &str) -> String {
    let mut t = text.to_string();
    for (pattern, replacement) in table.compositions(source) {
        t = t.replace(pattern, replacement);
    }
    let t: String = t.nfd().filter(|&c| !is_mark(c)).collect();
    debug!("pre [{}]: {:?}", source, t);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> ScriptTable {
        ScriptTable::from_json(json).unwrap()
    }

    fn empty_table() -> ScriptTable {
        table(r#"{"ccmp":{},"ssub":{},"simp":{},"fina":{},"liga":{}}"#)
    }

    #[test]
    fn test_strips_hebrew_points() {
        // shin with dagesh + qamats decomposes to bare letters
        let out = preprocess("שָׁלוֹם", &empty_table(), "Hebr");
        assert_eq!(out, "שלום");
    }

    #[test]
    fn test_strips_arabic_harakat() {
        let out = preprocess("مُحَمَّد", &empty_table(), "Arab");
        assert_eq!(out, "محمد");
    }

    #[test]
    fn test_decomposes_latin() {
        // š is not a table key after NFD; the base letter survives
        let out = preprocess("šalom", &empty_table(), "Latn");
        assert_eq!(out, "salom");
    }

    #[test]
    fn test_composition_rules_apply_in_order() {
        let t = table(
            r#"{
                "ccmp": { "Xxxx": { "ab": "b", "bb": "c" } },
                "ssub": {}, "simp": {}, "fina": {}, "liga": {}
            }"#,
        );
        // first rule rewrites "ab" -> "b", second sees the new "bb"
        assert_eq!(preprocess("abb", &t, "Xxxx"), "c");
    }

    #[test]
    fn test_composition_scoped_to_source_script() {
        let t = table(
            r#"{
                "ccmp": { "Hebr": { "ײ": "יי" } },
                "ssub": {}, "simp": {}, "fina": {}, "liga": {}
            }"#,
        );
        assert_eq!(preprocess("ײ", &t, "Hebr"), "יי");
        assert_eq!(preprocess("ײ", &t, "Arab"), "ײ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess("", &empty_table(), "Hebr"), "");
    }
}
