//! Unicode general-category classification helpers
//!
//! The pipeline needs exactly two predicates: "is this a letter" (word
//! boundary checks for final forms) and "is this a combining mark"
//! (diacritic stripping after decomposition). Both are defined in terms of
//! the Unicode general category so the behavior is portable and does not
//! depend on a regex engine's property escapes.

use unicode_general_category::{get_general_category, GeneralCategory};

/// True if `c` has a Letter general category (Lu, Ll, Lt, Lm, Lo).
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// True if `c` has a Mark general category (Mn, Mc, Me).
pub fn is_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert!(is_letter('a'));
        assert!(is_letter('א'));
        assert!(is_letter('ب'));
        assert!(is_letter('ʾ')); // modifier letter
        assert!(!is_letter('.'));
        assert!(!is_letter(' '));
        assert!(!is_letter('3'));
    }

    #[test]
    fn test_marks() {
        assert!(is_mark('\u{0301}')); // combining acute
        assert!(is_mark('\u{05B8}')); // hebrew qamats
        assert!(is_mark('\u{064E}')); // arabic fatha
        assert!(!is_mark('a'));
        assert!(!is_mark('א'));
    }
}
