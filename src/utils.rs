// Utility functions
use crate::normalizer::fold_diacritics;
use chrono::{SecondsFormat, Utc};
use std::cmp::Ordering;

/// Parses a numeric word, accepting a comma as the decimal separator.
pub fn parse_number(word: &str) -> Option<f64> {
    if !word.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    word.replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Current UTC time in RFC 3339 with milliseconds.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Punctuation in collation order; anything unlisted sorts after these.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary collation weight: whitespace, then punctuation, then digits, then letters.
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, 0)
    } else if c.is_ascii_digit() {
        (2, c as u32)
    } else if c.is_alphanumeric() {
        (3, c as u32)
    } else {
        let rank = PUNCTUATION_ORDER
            .chars()
            .position(|p| p == c)
            .unwrap_or(PUNCTUATION_ORDER.len());
        (1, rank as u32)
    }
}

/// Orders strings the way a pt-BR collator would for plain text: base letters
/// first, then accents, then case (lowercase before uppercase). Whitespace and
/// punctuation sort before digits, digits before letters.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary_a = fold_diacritics(a);
    let primary_b = fold_diacritics(b);
    primary_a
        .chars()
        .map(primary_weight)
        .cmp(primary_b.chars().map(primary_weight))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| swap_case(a).cmp(&swap_case(b)))
        .then_with(|| a.cmp(b))
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().next().unwrap_or(c)
            } else if c.is_lowercase() {
                c.to_uppercase().next().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
