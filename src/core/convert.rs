//! Conversion stage
//!
//! Converts pre-processed text one Unicode scalar at a time. Resolution
//! order, first success wins:
//!
//! 1. direct `source -> target` mapping
//! 2. Latin hub: `source -> Latn` (the character itself when unmapped),
//!    then `Latn -> target`
//! 3. simplify the Latin form via the global `simp` table and retry the
//!    `Latn -> target` leg
//!
//! When all three miss, the original character passes through unchanged.
//! Conversion is therefore total over arbitrary input: punctuation,
//! digits, whitespace, and characters of unrelated scripts are preserved
//! verbatim, and an unknown script code simply behaves as an empty
//! sub-table.
//!
//! Direct mappings take precedence because the hub round-trip is lossy:
//! authoring every script pair directly would be combinatorial, so only
//! the `Latn` legs are required, but a direct entry can preserve
//! distinctions the hub form collapses.

use log::debug;

use crate::data::table::ScriptTable;

/// Convert `text` from `source` to `target` script.
pub fn convert(text: &str, table: &ScriptTable, source: &str, target: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        out.push_str(&convert_char(c, table, source, target));
    }
    debug!("conv [{}->{}]: {:?}", source, target, out);
    out
}

fn convert_char(c: char, table: &ScriptTable, source: &str, target: &str) -> String {
    let key = c.to_string();
    if let Some(direct) = table.direct(source, target, &key) {
        return direct.to_string();
    }
    let latin = table.to_latin(source, &key).unwrap_or(&key);
    if let Some(hit) = table.from_latin(target, latin) {
        return hit.to_string();
    }
    let simplified = table.simplify(latin).unwrap_or(latin);
    match table.from_latin(target, simplified) {
        Some(hit) => hit.to_string(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> ScriptTable {
        ScriptTable::from_json(json).unwrap()
    }

    fn hub_table() -> ScriptTable {
        table(
            r#"{
                "ccmp": {},
                "ssub": {
                    "Hebr": { "Arab": { "ת": "ة" }, "Latn": { "א": "ʾ", "ת": "t", "ט": "ṭ" } },
                    "Latn": { "Arab": { "ʾ": "ء", "t": "ت" }, "Hebr": { "ʾ": "א", "t": "ת" } }
                },
                "simp": { "ṭ": "t" },
                "fina": {},
                "liga": {}
            }"#,
        )
    }

    #[test]
    fn test_direct_mapping_wins_over_hub() {
        // ת has a direct Arab entry that differs from the hub result
        assert_eq!(convert("ת", &hub_table(), "Hebr", "Arab"), "ة");
    }

    #[test]
    fn test_hub_fallback() {
        // א has no direct Arab entry: Hebr -> ʾ -> Arab
        assert_eq!(convert("א", &hub_table(), "Hebr", "Arab"), "ء");
    }

    #[test]
    fn test_simplify_then_retry() {
        // ט -> ṭ has no Arab entry; simp folds ṭ -> t -> ت
        assert_eq!(convert("ט", &hub_table(), "Hebr", "Arab"), "ت");
    }

    #[test]
    fn test_identity_passthrough() {
        let t = hub_table();
        assert_eq!(convert("ש", &t, "Hebr", "Arab"), "ש");
        assert_eq!(convert("hello, 123!", &t, "Hebr", "Arab"), "hello, 123!");
        assert_eq!(convert("", &t, "Hebr", "Arab"), "");
    }

    #[test]
    fn test_unknown_script_codes_degrade_to_identity() {
        let t = hub_table();
        assert_eq!(convert("א", &t, "Xxxx", "Arab"), "א");
        assert_eq!(convert("א", &t, "Hebr", "Xxxx"), "א");
    }

    #[test]
    fn test_latin_as_target_uses_direct_leg() {
        assert_eq!(convert("את", &hub_table(), "Hebr", "Latn"), "ʾt");
    }

    #[test]
    fn test_latin_as_source() {
        assert_eq!(convert("t", &hub_table(), "Latn", "Hebr"), "ת");
    }
}
