use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub start_url: String,
    /// Value written into `supermarket` for every collected product.
    pub supermarket: String,
    pub max_pages: usize,
    pub delay_ms: u64,
    pub delay_jitter_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub listings_output: PathBuf,
    pub products_output: Option<PathBuf>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            start_url: "https://mercado.carrefour.com.br/bebidas".into(),
            supermarket: "Carrefour".into(),
            max_pages: 50,
            delay_ms: 2000,
            delay_jitter_ms: 1000,
            timeout_secs: 60,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".into(),
            listings_output: PathBuf::from("output.json"),
            products_output: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Product files merged in this order before categorizing.
    pub inputs: Vec<PathBuf>,
    /// When unset the categories are printed to stdout.
    pub output: Option<PathBuf>,
    pub scrape: ScrapeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from("data/data01.json")],
            output: None,
            scrape: ScrapeConfig::default(),
        }
    }
}

/// Loads the config file; a missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(dir.path().join("nope.json")).unwrap();
        assert_eq!(cfg.inputs, vec![PathBuf::from("data/data01.json")]);
        assert!(cfg.output.is_none());
        assert_eq!(cfg.scrape.max_pages, 50);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"inputs": ["a.json", "b.json"], "scrape": {{"supermarket": "Atacadao", "max_pages": 3}}}}"#
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.inputs.len(), 2);
        assert_eq!(cfg.scrape.supermarket, "Atacadao");
        assert_eq!(cfg.scrape.max_pages, 3);
        assert_eq!(cfg.scrape.timeout_secs, 60);
        assert_eq!(cfg.scrape.listings_output, PathBuf::from("output.json"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Json(_))));
    }
}
