use crate::normalizer::{normalize_quantity, normalize_string, normalize_type};
use crate::parser::vocabulary::is_stop_word;

/// Builds the grouping key for a title. Word order does not matter: the
/// folded tokens are sorted before joining with `_`.
pub fn generate_category_key(title: &str) -> String {
    let folded = normalize_type(&normalize_quantity(&normalize_string(title)));
    let mut tokens: Vec<&str> = folded
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .collect();
    tokens.sort_unstable();
    tokens.join("_")
}
