use crate::{
    document::Document,
    stage::{Stage, StageError},
};

/// Maps the entire content to lowercase. Works on the whole string, so the
/// trailing newline (if any) survives.
pub struct Lowercase;

impl Stage for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        Ok(doc.with_content(doc.content().to_lowercase()))
    }
}
