//! Post-processing stage
//!
//! Applies target-script rewrites after character conversion:
//!
//! 1. Final forms (`fina`): a form is rewritten to its word-final
//!    allomorph only where it closes a word: the preceding character must
//!    be a letter and the following character must be a non-letter or the
//!    end of the text. Word-initial and word-internal occurrences are
//!    left alone. Boundary checks use the Unicode Letter general category
//!    directly rather than a regex engine's property escapes.
//! 2. Ligatures (`liga`): literal replacement of every occurrence of the
//!    sequence, unconditionally. An empty replacement deletes the
//!    sequence. Ligatures run after finals so final-form rules match the
//!    pre-ligature spelling.
//!
//! Rules in both tables apply in table order; each rule operates on the
//! text already rewritten by the rules before it.

use log::debug;

use crate::data::table::ScriptTable;
use crate::utils::unicode::is_letter;

/// Apply final-form and ligature rules of `target` to converted text.
pub fn postprocess(text: &str, table: &ScriptTable, target: &str) -> String {
    let mut t = text.to_string();
    for (form, final_form) in table.finals(target) {
        t = apply_final(&t, form, final_form);
    }
    for (sequence, ligature) in table.ligatures(target) {
        t = t.replace(sequence, ligature);
    }
    debug!("post [{}]: {:?}", target, t);
    t
}

/// Rewrite word-final occurrences of `form` to `final_form`.
///
/// Scans left to right without overlap. The left boundary is checked
/// against the output built so far, which matches the original text at
/// that position except where an earlier occurrence was rewritten.
fn apply_final(text: &str, form: &str, final_form: &str) -> String {
    if form.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        if text[i..].starts_with(form) {
            let end = i + form.len();
            let prev_is_letter = out.chars().next_back().is_some_and(is_letter);
            let closes_word = match text[end..].chars().next() {
                None => true,
                Some(next) => !is_letter(next),
            };
            if prev_is_letter && closes_word {
                out.push_str(final_form);
                i = end;
                continue;
            }
        }
        let Some(c) = text[i..].chars().next() else {
            break;
        };
        out.push(c);
        i += c.len_utf8();
    }
    out
}
