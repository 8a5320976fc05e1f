// Fixed pt-BR grocery vocabulary used by the title parser and category keys.
use crate::normalizer::normalize_string;

pub static QUANTITY_UNITS: &[&str] = &[
    "kg", "l", "litro", "quilo", "g", "ml", "gramas", "1000g", "1000ml",
];

pub static TYPE_WORDS: &[&str] = &[
    "integral", "desnatado", "semidesnatado", "semi-desnatado", "semi", "branco", "preto",
    "carioca", "zero", "lactose", "sem", "fatiado", "patinho", "parafuso", "espaguete",
    "bovina", "moída", "mussarela", "prato", "soja", "laranja", "uva",
];

pub static OPTIONAL_MODIFIERS: &[&str] = &["fresco", "congelado"];

pub static COMMON_NAMES: &[&str] = &[
    "leite", "arroz", "feijão", "feijao", "macarrão", "macarrao", "suco", "óleo", "oleo",
    "carne", "queijo", "frango", "picanha", "peito", "filé", "file",
];

/// Multi-word brands, matched as substrings in this order.
pub static COMPOSITE_BRANDS: &[&str] = &[
    "Tio João",
    "Natural One",
    "Del Valle",
    "Casa Madeira",
    "Casa de Madeira",
];

pub static STOP_WORDS: &[&str] = &["de", "do", "da", "para", "tipo", "1"];

/// Entries are folded the same way as the word they are compared with.
fn contains(table: &[&str], normalized: &str) -> bool {
    table.iter().any(|entry| normalize_string(entry) == normalized)
}

pub fn is_quantity_unit(normalized: &str) -> bool {
    contains(QUANTITY_UNITS, normalized)
}

pub fn is_type_word(normalized: &str) -> bool {
    contains(TYPE_WORDS, normalized)
}

pub fn is_optional_modifier(normalized: &str) -> bool {
    contains(OPTIONAL_MODIFIERS, normalized)
}

pub fn is_common_name(normalized: &str) -> bool {
    contains(COMMON_NAMES, normalized)
}

pub fn is_stop_word(normalized: &str) -> bool {
    STOP_WORDS.contains(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_entries_match_folded_words() {
        assert!(is_type_word("moida"));
        assert!(is_common_name("feijao"));
        assert!(is_common_name("oleo"));
        assert!(is_type_word("semidesnatado"));
    }

    #[test]
    fn stop_words_are_exact() {
        assert!(is_stop_word("de"));
        assert!(is_stop_word("1"));
        assert!(!is_stop_word("1l"));
        assert!(!is_stop_word("dos"));
    }
}
