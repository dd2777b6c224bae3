//! Script detection
//!
//! Classifies input text to a dominant ISO 15924 script code from the
//! Unicode script property of each character. Detection is total: text
//! with no script-bearing characters maps to the `"Zyyy"` fallback.

use fxhash::FxHashMap;
use unicode_script::{Script, UnicodeScript};

use crate::data::table::UNKNOWN;

/// Return the 4-letter code of the script with the highest character
/// count in `text`.
///
/// Characters whose script property is Common, Inherited, or Unknown
/// (whitespace, punctuation, digits, combining marks) never enter the
/// tally. Ties break toward the script that reached the maximum count
/// first in input order, which keeps the result deterministic without
/// imposing an alphabetic order on script codes. Empty input, or input
/// made up entirely of script-neutral characters, yields [`UNKNOWN`].
pub fn detect(text: &str) -> &'static str {
    let mut counts: FxHashMap<Script, usize> = FxHashMap::default();
    let mut best: Option<(Script, usize)> = None;
    for c in text.chars() {
        let sc = c.script();
        if matches!(sc, Script::Common | Script::Inherited | Script::Unknown) {
            continue;
        }
        let count = counts.entry(sc).or_insert(0);
        *count += 1;
        if best.map_or(true, |(_, max)| *count > max) {
            best = Some((sc, *count));
        }
    }
    match best {
        Some((sc, _)) => sc.short_name(),
        None => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_script() {
        assert_eq!(detect("שלום"), "Hebr");
        assert_eq!(detect("سلام"), "Arab");
        assert_eq!(detect("hello"), "Latn");
        assert_eq!(detect("ܫܠܡܐ"), "Syrc");
    }

    #[test]
    fn test_majority_wins() {
        assert_eq!(detect("שלום ab"), "Hebr");
        assert_eq!(detect("ab שלום"), "Hebr");
    }

    #[test]
    fn test_tie_breaks_to_first_at_max() {
        // two Hebrew and two Latin characters: Hebrew reaches 2 first
        assert_eq!(detect("שלab"), "Hebr");
        assert_eq!(detect("abשל"), "Latn");
    }

    #[test]
    fn test_neutral_characters_ignored() {
        assert_eq!(detect("  ,.שלום!!"), "Hebr");
        assert_eq!(detect("123 ש"), "Hebr");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(detect(""), "Zyyy");
        assert_eq!(detect("123 ,.!"), "Zyyy");
        assert_eq!(detect("   "), "Zyyy");
    }

    #[test]
    fn test_deterministic() {
        let text = "שלום عليكم hello";
        assert_eq!(detect(text), detect(text));
    }
}
