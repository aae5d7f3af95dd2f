use crate::{
    document::Document,
    stage::{Stage, StageError},
};

/// Trims leading and trailing whitespace from every line.
pub struct Strip;

impl Stage for Strip {
    fn name(&self) -> &'static str {
        "strip"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        let lines: Vec<&str> = doc.content().lines().map(str::trim).collect();
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
    fn trims_every_line() {
        let out = Strip.apply(&doc("a  \nb\n  c   \n")).unwrap();
        assert_eq!(out.content(), "a\nb\nc");
    }

    #[test]
    fn empty_input_stays_empty() {
        let out = Strip.apply(&doc("")).unwrap();
        assert_eq!(out.content(), "");
    }

    #[test]
    fn drops_trailing_newline_on_rejoin() {
        let out = Strip.apply(&doc("a\nb\n")).unwrap();
        assert_eq!(out.content(), "a\nb");
    }

    #[test]
    fn idempotent() {
        let once = Strip.apply(&doc("  a\t\n\tb  \n")).unwrap();
        let twice = Strip.apply(&once).unwrap();
        assert_eq!(once.content(), twice.content());
    }
}
