use crate::model::{RawProduct, SourceError};
use crate::source::traits::ProductSource;
use crate::storage::read_json;
use std::path::PathBuf;
use tracing::info;

/// A JSON array of `{title, supermarket}` objects on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ProductSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<RawProduct>, SourceError> {
        let products: Vec<RawProduct> = read_json(&self.path).await?;
        info!("Loaded {} products from {}", products.len(), self.path.display());
        Ok(products)
    }
}
