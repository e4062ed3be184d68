//! Byte-level scanning helpers shared by the classifier rules
//!
//! All scanners work on ASCII. Message text is lower-cased with
//! `to_ascii_lowercase`, which keeps byte offsets identical between the
//! original and lower-cased strings.

/// Regex-style word byte: ASCII alphanumeric or underscore.
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether position `at` starts a word.
pub(crate) fn at_word_start(bytes: &[u8], at: usize) -> bool {
    at == 0 || !is_word_byte(bytes[at - 1])
}

/// Whether `term` occurs in `haystack`.
///
/// A term starting with a digit must not be glued to a preceding digit, so
/// `"5 sec"` does not match inside `"15 sec"`.
pub(crate) fn contains_term(haystack: &str, term: &str) -> bool {
    let leading_digit = term.as_bytes().first().is_some_and(u8::is_ascii_digit);
    if !leading_digit {
        return haystack.contains(term);
    }
    let bytes = haystack.as_bytes();
    haystack.match_indices(term).any(|(at, _)| at == 0 || !bytes[at - 1].is_ascii_digit())
}

pub(crate) fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(haystack, term))
}

/// Skip ASCII whitespace from `at`, returning the first non-space position.
pub(crate) fn skip_spaces(bytes: &[u8], mut at: usize) -> usize {
    while at < bytes.len() && bytes[at].is_ascii_whitespace() {
        at += 1;
    }
    at
}

/// Read a run of ASCII digits starting at `at`.
///
/// Returns the digits and the position after them, or `None` when `at` is
/// not a digit.
pub(crate) fn digits_at(text: &str, at: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    let mut end = at;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > at).then(|| (&text[at..end], end))
}

/// Whether `bytes[at..]` starts with the word `word` at a word boundary.
pub(crate) fn word_at(bytes: &[u8], at: usize, word: &[u8]) -> bool {
    at_word_start(bytes, at) && bytes[at..].starts_with(word)
}

/// Maximal runs of word bytes with their start offsets.
pub(crate) fn words(text: &str) -> Vec<(usize, &str)> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if is_word_byte(bytes[i]) {
            let start = i;
            while i < bytes.len() && is_word_byte(bytes[i]) {
                i += 1;
            }
            out.push((start, &text[start..i]));
        } else {
            i += 1;
        }
    }
    out
}
