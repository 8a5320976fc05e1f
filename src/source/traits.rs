use crate::model::{RawProduct, SourceError};

/// Anything that yields raw products for the categorizer.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    fn describe(&self) -> String;
    async fn load(&self) -> Result<Vec<RawProduct>, SourceError>;
}
