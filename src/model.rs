// Core structs: RawProduct, ParsedTitle, Category, ScrapedListing
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Treats `null` like an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One scraped product as handed to the categorizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supermarket: String,
}

impl RawProduct {
    pub fn new(title: impl Into<String>, supermarket: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            supermarket: supermarket.into(),
        }
    }
}

/// Structured fields extracted from a free-text title. Absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTitle {
    pub brand: String,
    pub kind: String,
    pub name: String,
    pub quantity: String,
    pub modifiers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub count: usize,
    pub products: Vec<RawProduct>,
}

/// A product card as collected from a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedListing {
    pub name: String,
    pub price: String,
    pub image: String,
    pub timestamp: String,
}

impl ScrapedListing {
    /// Converts a collected card into categorizer input; a missing name becomes an empty title.
    pub fn into_product(self, supermarket: &str) -> RawProduct {
        let title = if self.name == "N/A" { String::new() } else { self.name };
        RawProduct::new(title, supermarket)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub listings: Vec<ScrapedListing>,
    pub next_page: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    InvalidResponse(u16),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScraperError::Timeout
        } else {
            ScraperError::HttpError(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid selector: {0}")]
    HtmlParseError(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json error on {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
