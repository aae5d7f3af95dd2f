// src/document.rs
// Immutable value flowing through the pipeline. Stages never touch `path`
// or `category`; the only way to derive a new document is `with_content`.

/// Declared content category, detected from the file extension by the loader.
///
/// Informational only; no built-in stage branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Text,
    Csv,
    Json,
}

/// A loaded file: identity, full text content and declared category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: String,
    content: String,
    category: Category,
}

impl Document {
    pub fn new(path: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Derive a new document with different content, same `path` and `category`.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            content: content.into(),
            category: self.category,
        }
    }

    /// Content length in Unicode scalar values, not bytes.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
