use crate::{
    document::Document,
    stage::{Stage, StageError},
};

/// Keeps the first `n` lines.
///
/// `n` is kept signed so a non-positive count is representable and fails in
/// the stage itself with [`StageError::InvalidArgument`], independent of the
/// input content. A document with fewer than `n` lines passes through whole.
pub struct Head {
    count: i64,
}

impl Head {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

impl Stage for Head {
    fn name(&self) -> &'static str {
        "head"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        if self.count <= 0 {
            return Err(StageError::InvalidArgument {
                stage: self.name(),
                message: format!("line count must be positive, got {}", self.count),
            });
        }
        let lines: Vec<&str> = doc.content().lines().take(self.count as usize).collect();
        Ok(doc.with_content(lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Category;

    fn doc(content: &str) -> Document {
        Document::new("x.txt", content, Category::Text)
    }

    #[test]
    fn keeps_first_n_lines() {
        let out = Head::new(2).apply(&doc("a\nb\nc\n")).unwrap();
        assert_eq!(out.content(), "a\nb");
    }

    #[test]
    fn short_document_passes_through_whole() {
        let out = Head::new(10).apply(&doc("a\nb")).unwrap();
        assert_eq!(out.content(), "a\nb");
    }

    #[test]
    fn zero_count_is_invalid() {
        let err = Head::new(0).apply(&doc("a\n")).unwrap_err();
        assert!(matches!(err, StageError::InvalidArgument { stage: "head", .. }));
    }

    #[test]
    fn negative_count_is_invalid_even_on_empty_input() {
        let err = Head::new(-3).apply(&doc("")).unwrap_err();
        assert!(matches!(err, StageError::InvalidArgument { .. }));
    }
}
