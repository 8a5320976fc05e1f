pub mod fetcher;
pub mod file;
pub mod traits;

pub use fetcher::HttpListingSource;
pub use file::JsonFileSource;
pub use traits::ProductSource;

use crate::model::{RawProduct, SourceError};
use futures::future::join_all;
use tracing::error;

/// Loads every source concurrently and concatenates the results in source
/// order. Any failure fails the whole batch.
pub async fn load_all(sources: &[Box<dyn ProductSource>]) -> Result<Vec<RawProduct>, SourceError> {
    let results = join_all(sources.iter().map(|s| s.load())).await;

    let mut products = Vec::new();
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(batch) => products.extend(batch),
            Err(e) => {
                error!("Failed to load {}: {}", source.describe(), e);
                return Err(e);
            }
        }
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sources_are_concatenated_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        std::fs::write(&a, r#"[{"title": "Leite Integral 1L", "supermarket": "A"}]"#).unwrap();
        std::fs::write(
            &b,
            r#"[{"title": "1L Leite Integral", "supermarket": "B"},
                {"title": "Arroz Branco 1kg", "supermarket": "B"}]"#,
        )
        .unwrap();

        let sources: Vec<Box<dyn ProductSource>> =
            vec![Box::new(JsonFileSource::new(&a)), Box::new(JsonFileSource::new(&b))];
        let products = load_all(&sources).await.unwrap();

        let supermarkets: Vec<&str> = products.iter().map(|p| p.supermarket.as_str()).collect();
        assert_eq!(supermarkets, vec!["A", "B", "B"]);
    }

    #[tokio::test]
    async fn one_bad_source_fails_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, "[]").unwrap();

        let sources: Vec<Box<dyn ProductSource>> = vec![
            Box::new(JsonFileSource::new(&good)),
            Box::new(JsonFileSource::new(dir.path().join("missing.json"))),
        ];
        assert!(load_all(&sources).await.is_err());
    }
}
