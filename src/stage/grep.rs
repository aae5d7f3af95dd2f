use crate::{
    document::Document,
    stage::{Stage, StageError},
};
use memchr::memmem;

/// Keeps only lines containing `pattern` as a literal, case-sensitive
/// substring. Relative line order is preserved.
///
/// The empty pattern matches every line, same as `str::contains("")`.
pub struct Grep {
    pattern: String,
}

impl Grep {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Stage for Grep {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        // One finder for the whole run; the prefilter tables are built once.
        let finder = memmem::Finder::new(self.pattern.as_bytes());
        let lines: Vec<&str> = doc
            .content()
            .lines()
            .filter(|line| finder.find(line.as_bytes()).is_some())
            .collect();
        Ok(doc.with_content(lines.join("\n")))
    }
}
