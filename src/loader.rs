//! Resolves a path to a [`Document`]: existence check, category detection
//! from the extension, full UTF-8 read. Loader failures happen before any
//! pipeline run starts and are never wrapped by the pipeline.

use crate::document::{Category, Document};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("unsupported file type: `{0}`")]
    UnsupportedCategory(String),

    #[error("failed to read `{path}`")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Load `path` as a whole into memory. Recognized extensions: txt, csv, json
/// (ASCII case-insensitive).
pub fn load(path: impl AsRef<Path>) -> Result<Document, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::NotFound(path.display().to_string()));
    }

    let category = detect_category(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Document::new(path.display().to_string(), content, category))
}

fn detect_category(path: &Path) -> Result<Category, LoaderError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "txt" => Ok(Category::Text),
        "csv" => Ok(Category::Csv),
        "json" => Ok(Category::Json),
        other => Err(LoaderError::UnsupportedCategory(format!(".{other}"))),
    }
}
