// Splits a retail product title into brand, type, name, quantity and modifiers.
use crate::model::ParsedTitle;
use crate::normalizer::{fold_diacritics, normalize_string};
use crate::parser::vocabulary::{
    is_common_name, is_optional_modifier, is_quantity_unit, is_stop_word, is_type_word,
    COMPOSITE_BRANDS,
};
use crate::utils::parse_number;
use regex::Regex;
use std::sync::LazyLock;

static GLUED_QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+([.,][0-9]+)?(kg|quilos?|l|litros?|ml|g|gramas?)$").unwrap()
});

/// A number with its unit attached, like `1L` or `1,5kg`.
fn is_glued_quantity(word: &str) -> bool {
    GLUED_QUANTITY_RE.is_match(&fold_diacritics(word))
}

fn is_brand_candidate(word: &str, normalized: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_uppercase())
        && word.chars().count() > 2
        && !is_common_name(normalized)
}

/// Removes the rightmost quantity from `words` and returns it.
fn take_quantity(words: &mut Vec<&str>) -> String {
    for i in (0..words.len()).rev() {
        let word = words[i];
        if is_quantity_unit(&normalize_string(word)) {
            if i > 0 && parse_number(words[i - 1]).is_some() {
                let quantity = format!("{} {}", words[i - 1], word);
                words.drain(i - 1..=i);
                return quantity;
            }
            words.remove(i);
            return word.to_string();
        }
        if is_glued_quantity(word) {
            words.remove(i);
            return word.to_string();
        }
    }
    String::new()
}

pub fn extract_product_info(title: &str) -> ParsedTitle {
    let mut words: Vec<&str> = title.split_whitespace().collect();
    let quantity = take_quantity(&mut words);

    let remaining: Vec<&str> = words
        .into_iter()
        .filter(|w| !is_stop_word(&normalize_string(w)))
        .collect();
    let title_str = remaining.join(" ");

    let mut brand = String::new();
    let stripped;
    let remaining: Vec<&str> = match COMPOSITE_BRANDS.iter().find(|b| title_str.contains(**b)) {
        Some(found) => {
            brand = found.to_string();
            stripped = title_str.replacen(*found, "", 1);
            stripped.split_whitespace().collect()
        }
        None => remaining,
    };

    let mut kind: Vec<String> = Vec::new();
    let mut name: Vec<String> = Vec::new();
    let mut modifiers: Vec<String> = Vec::new();

    let mut i = 0;
    while i < remaining.len() {
        let word = remaining[i];
        let normalized = normalize_string(word);
        let next = remaining.get(i + 1).map(|w| normalize_string(w));

        if is_type_word(&normalized) {
            if normalized == "semi" && next.as_deref() == Some("desnatado") {
                kind.push("Semi-Desnatado".to_string());
                i += 2;
            } else if (normalized == "sem" || normalized == "zero")
                && next.as_deref() == Some("lactose")
            {
                kind.push(format!("{} {}", word, remaining[i + 1]));
                i += 2;
            } else {
                kind.push(word.to_string());
                i += 1;
            }
            continue;
        }

        if is_optional_modifier(&normalized) {
            modifiers.push(word.to_string());
        } else if name.is_empty() && is_common_name(&normalized) {
            name.push(word.to_string());
        } else if brand.is_empty() && is_brand_candidate(word, &normalized) {
            brand = word.to_string();
        } else if name.is_empty() {
            name.push(word.to_string());
        } else {
            kind.push(word.to_string());
        }
        i += 1;
    }

    // Second pass: pull a capitalized word out of a multi-word name.
    if brand.is_empty() && name.len() > 1 {
        if let Some(idx) = name
            .iter()
            .position(|w| is_brand_candidate(w, &normalize_string(w)))
        {
            brand = name.remove(idx);
        }
    }

    ParsedTitle {
        brand,
        kind: kind.join(" "),
        name: name.join(" "),
        quantity,
        modifiers: modifiers.join(" "),
    }
}
