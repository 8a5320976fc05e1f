use crate::model::ParsedTitle;
use crate::normalizer::{display_quantity, display_type};

/// Human-readable category name. Field order is fixed: name, type,
/// modifiers, brand, quantity.
pub fn generate_category_name(info: &ParsedTitle) -> String {
    let kind = display_type(&info.kind);
    let quantity = display_quantity(&info.quantity);

    [
        info.name.as_str(),
        kind.as_str(),
        info.modifiers.as_str(),
        info.brand.as_str(),
        quantity.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str, kind: &str, modifiers: &str, brand: &str, quantity: &str) -> ParsedTitle {
        ParsedTitle {
            brand: brand.into(),
            kind: kind.into(),
            name: name.into(),
            quantity: quantity.into(),
            modifiers: modifiers.into(),
        }
    }

    #[test]
    fn fields_follow_fixed_order() {
        let info = parsed("Leite", "Integral", "", "Piracanjuba", "1 litro");
        assert_eq!(generate_category_name(&info), "Leite Integral Piracanjuba 1L");
    }

    #[test]
    fn modifiers_sit_between_type_and_brand() {
        let info = parsed("Peito", "Frango", "Congelado", "Seara", "1000g");
        assert_eq!(generate_category_name(&info), "Peito Frango Congelado Seara 1kg");
    }

    #[test]
    fn type_phrases_are_display_cased() {
        let info = parsed("Leite", "sem lactose", "", "Italac", "1L");
        assert_eq!(generate_category_name(&info), "Leite Sem Lactose Italac 1L");
    }

    #[test]
    fn empty_fields_are_skipped() {
        assert_eq!(generate_category_name(&parsed("Arroz", "", "", "", "")), "Arroz");
        assert_eq!(generate_category_name(&ParsedTitle::default()), "");
    }
}
