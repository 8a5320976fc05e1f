// Text folding shared by the title parser, category keys and labels.
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static LITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+[,.]?[0-9]*)\s?(litros?|l)").unwrap());
static KILO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+[,.]?[0-9]*)\s?(quilos?|kg)").unwrap());
static GRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+[,.]?[0-9]*)\s?(gramas?|g)").unwrap());
static THOUSAND_G_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)1000g").unwrap());
static THOUSAND_ML_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)1000ml").unwrap());
static DECIMAL_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+),([0-9]+)").unwrap());

static DISPLAY_LITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+[,.]?[0-9]*)\s?l").unwrap());
static DISPLAY_KILO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+[,.]?[0-9]*)\s?kg").unwrap());
static DISPLAY_GRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+[,.]?[0-9]*)\s?g").unwrap());

static SEMI_DESNATADO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)semi[- ]?desnatado").unwrap());
static SEM_LACTOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sem[- ]?lactose").unwrap());
static ZERO_LACTOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)zero[- ]?lactose").unwrap());

static SEMIDESNATADO_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)semidesnatado").unwrap());
static SEMLACTOSE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)semlactose").unwrap());
static ZEROLACTOSE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)zerolactose").unwrap());

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Lowercases, strips diacritics and keeps only `[a-z0-9]` plus whitespace.
pub fn normalize_string(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Lowercases and strips diacritics, leaving punctuation alone.
pub fn fold_diacritics(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Collapses unit spellings into `<n>l`, `<n>kg` and `<n>g`.
pub fn normalize_quantity(s: &str) -> String {
    let s = LITER_RE.replace_all(s, "${1}l");
    let s = KILO_RE.replace_all(&s, "${1}kg");
    let s = GRAM_RE.replace_all(&s, "${1}g");
    let s = THOUSAND_G_RE.replace_all(&s, "1kg");
    let s = THOUSAND_ML_RE.replace_all(&s, "1l");
    DECIMAL_COMMA_RE.replace_all(&s, "${1}.${2}").into_owned()
}

/// Quantity as shown in a category label, e.g. `1 litro` -> `1L`.
pub fn display_quantity(s: &str) -> String {
    let s = normalize_quantity(s);
    let s = DISPLAY_LITER_RE.replace_all(&s, "${1}L");
    let s = DISPLAY_KILO_RE.replace_all(&s, "${1}kg");
    DISPLAY_GRAM_RE.replace_all(&s, "${1}g").into_owned()
}

pub fn normalize_type(s: &str) -> String {
    let s = SEMI_DESNATADO_RE.replace_all(s, "semidesnatado");
    let s = SEM_LACTOSE_RE.replace_all(&s, "semlactose");
    ZERO_LACTOSE_RE.replace_all(&s, "zerolactose").into_owned()
}

/// Type words as shown in a category label.
pub fn display_type(s: &str) -> String {
    let s = normalize_type(s);
    let s = SEMIDESNATADO_TOKEN_RE.replace_all(&s, "Semi-Desnatado");
    let s = SEMLACTOSE_TOKEN_RE.replace_all(&s, "Sem Lactose");
    ZEROLACTOSE_TOKEN_RE.replace_all(&s, "Zero Lactose").into_owned()
}
