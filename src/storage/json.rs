use crate::model::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

fn io_err(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn json_err(path: &Path, source: serde_json::Error) -> StorageError {
    StorageError::Json {
        path: path.display().to_string(),
        source,
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = fs::read_to_string(path).await.map_err(|e| io_err(path, e))?;
    serde_json::from_str(&content).map_err(|e| json_err(path, e))
}

/// Writes pretty-printed JSON next to `path` and renames it into place, so
/// readers never observe a half-written file.
pub async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string_pretty(value).map_err(|e| json_err(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| io_err(parent, e))?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, body).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(io_err(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        warn!("Failed to move {} into place: {}", tmp.display(), e);
        let _ = fs::remove_file(&tmp).await;
        return Err(io_err(path, e));
    }

    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawProduct;

    #[tokio::test]
    async fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        let products = vec![RawProduct::new("Arroz Tio João 5kg", "Carrefour")];

        write_json_atomic(&path, &products).await.unwrap();

        let back: Vec<RawProduct> = read_json(&path).await.unwrap();
        assert_eq!(back, products);
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn output_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json_atomic(&path, &vec![RawProduct::new("Leite", "A")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  {\n    \"title\": \"Leite\""));
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_json::<Vec<RawProduct>>(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[{\"title\": ").unwrap();

        let err = read_json::<Vec<RawProduct>>(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }
}
