use crate::{
    document::Document,
    stage::{Stage, StageError},
};

/// Keeps the last `n` lines.
///
/// Same precondition as [`crate::stage::head::Head`]: a non-positive count
/// fails with [`StageError::InvalidArgument`] regardless of the input.
pub struct Tail {
    count: i64,
}

impl Tail {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

impl Stage for Tail {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn apply(&self, doc: &Document) -> Result<Document, StageError> {
        if self.count <= 0 {
            return Err(StageError::InvalidArgument {
                stage: self.name(),
                message: format!("line count must be positive, got {}", self.count),
            });
        }
        let lines: Vec<&str> = doc.content().lines().collect();
        let keep = lines.len().saturating_sub(self.count as usize);
        Ok(doc.with_content(lines[keep..].join("\n")))
    }
}
