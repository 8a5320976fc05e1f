use crate::categorizer::key::generate_category_key;
use crate::categorizer::label::generate_category_name;
use crate::model::{Category, RawProduct};
use crate::parser::extract_product_info;
use crate::utils::locale_compare;
use std::collections::HashMap;
use tracing::debug;

/// Groups products whose titles share a category key and returns the
/// categories sorted by label.
pub fn categorize_products(products: &[RawProduct]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for product in products {
        let info = extract_product_info(&product.title);
        let key = generate_category_key(&product.title);

        let idx = *by_key.entry(key).or_insert_with_key(|key| {
            let label = generate_category_name(&info);
            debug!("New category {:?} for key {:?}", label, key);
            categories.push(Category {
                category: label,
                count: 0,
                products: Vec::new(),
            });
            categories.len() - 1
        });

        let category = &mut categories[idx];
        category.count += 1;
        category.products.push(RawProduct {
            title: product.title.clone(),
            supermarket: product.supermarket.clone(),
        });
    }

    categories.sort_by(|a, b| locale_compare(&a.category, &b.category));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reordered_titles_share_a_category() {
        let input = vec![
            RawProduct::new("Leite Integral Piracanjuba 1L", "A"),
            RawProduct::new("1L Leite Integral Piracanjuba", "B"),
        ];

        let result = categorize_products(&input);

        assert_eq!(
            result,
            vec![Category {
                category: "Leite Integral Piracanjuba 1L".into(),
                count: 2,
                products: input.clone(),
            }]
        );
    }

    #[test]
    fn case_and_accent_variants_aggregate_in_first_seen_order() {
        let input = vec![
            RawProduct::new("Feijão Carioca Camil 1kg", "Carrefour"),
            RawProduct::new("Arroz Tio João Branco 1kg", "Carrefour"),
            RawProduct::new("FEIJAO CARIOCA CAMIL 1 KG", "Atacadão"),
        ];

        let result = categorize_products(&input);
        assert_eq!(result.len(), 2);

        let feijao = result.iter().find(|c| c.count == 2).unwrap();
        assert_eq!(feijao.category, "Feijão Carioca Camil 1kg");
        assert_eq!(feijao.products[0].supermarket, "Carrefour");
        assert_eq!(feijao.products[1].supermarket, "Atacadão");
    }

    #[test]
    fn categories_sorted_by_label() {
        let input = vec![
            RawProduct::new("Suco Del Valle Uva 1L", "A"),
            RawProduct::new("Óleo de Soja Liza 900ml", "A"),
            RawProduct::new("Arroz Tio João Branco 1kg", "A"),
            RawProduct::new("Leite Integral Italac 1L", "A"),
        ];

        let labels: Vec<String> = categorize_products(&input)
            .into_iter()
            .map(|c| c.category)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Arroz Branco Tio João 1kg",
                "Leite Integral Italac 1L",
                "Óleo Soja Liza 900ml",
                "Suco Uva Del Valle 1L",
            ]
        );
    }

    #[test]
    fn missing_titles_fall_into_one_bucket() {
        let input = vec![
            RawProduct::new("", "A"),
            RawProduct { title: String::new(), supermarket: "B".into() },
        ];

        let result = categorize_products(&input);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "");
        assert_eq!(result[0].count, 2);
    }

    #[test]
    fn empty_input_gives_no_categories() {
        assert!(categorize_products(&[]).is_empty());
    }
}
