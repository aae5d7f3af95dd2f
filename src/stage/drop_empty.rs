use crate::{
    document::Document,
    stage::{Stage, StageError},
};

/// Removes every line that is empty or all-whitespace.
pub struct DropEmpty;

impl Stage for DropEmpty {
    fn name(&self) -> &'static str {
        "drop_empty"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        let lines: Vec<&str> = doc
            .content()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
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
    fn drops_blank_and_whitespace_lines() {
        let out = DropEmpty.apply(&doc("a\n\n   \nb\n")).unwrap();
        assert_eq!(out.content(), "a\nb");
    }

    #[test]
    fn all_blank_document_becomes_empty() {
        let out = DropEmpty.apply(&doc("\n  \n\t\n")).unwrap();
        assert_eq!(out.content(), "");
    }
}
