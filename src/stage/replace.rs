use crate::{
    document::Document,
    stage::{Stage, StageError},
};
use memchr::memmem;

/// Replaces every non-overlapping occurrence of `old` with `new` across the
/// whole content.
///
/// An empty `old` is rejected with [`StageError::InvalidArgument`]: there is
/// no sensible occurrence set for the empty needle, and refusing it outright
/// keeps the stage total on everything else.
pub struct Replace {
    old: String,
    new: String,
}

impl Replace {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

impl Stage for Replace {
    fn name(&self) -> &'static str {
        "replace"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        if self.old.is_empty() {
            return Err(StageError::InvalidArgument {
                stage: self.name(),
                message: "search pattern must not be empty".to_owned(),
            });
        }

        // Fast pre-check: skip the allocation when the needle never occurs.
        if memmem::find(doc.content().as_bytes(), self.old.as_bytes()).is_none() {
            return Ok(doc.clone());
        }

        Ok(doc.with_content(doc.content().replace(&self.old, &self.new)))
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
    fn replaces_every_occurrence() {
        let stage = Replace::new("a", "abc");
        let out = stage.apply(&doc("a\nbbbb\ncbbba\n")).unwrap();
        assert_eq!(out.content(), "abc\nbbbb\ncbbbabc\n");
    }

    #[test]
    fn preserves_trailing_newline() {
        let stage = Replace::new("gral", "GRAL");
        let out = stage.apply(&doc("gral\nok\n")).unwrap();
        assert_eq!(out.content(), "GRAL\nok\n");
    }

    #[test]
    fn no_occurrence_leaves_content_unchanged() {
        let stage = Replace::new("zzz", "yyy");
        let input = doc("a\nb\n");
        let out = stage.apply(&input).unwrap();
        assert_eq!(out.content(), input.content());
    }

    #[test]
    fn empty_pattern_is_invalid() {
        let stage = Replace::new("", "x");
        let err = stage.apply(&doc("abc")).unwrap_err();
        assert!(matches!(err, StageError::InvalidArgument { stage: "replace", .. }));
    }
}
