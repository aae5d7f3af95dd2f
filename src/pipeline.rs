// src/pipeline.rs
use crate::{
    document::Document,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Uniform wrapper for any stage failure, carrying the offending stage's
    /// name. The underlying [`StageError`] is reachable through
    /// `std::error::Error::source`.
    #[error("stage `{stage}` failed during pipeline run")]
    StepFailure {
        stage: &'static str,
        #[source]
        source: StageError,
    },
}

/// Summary of one completed run.
///
/// Character counts are in Unicode scalar values. `changed` and
/// `chars_after` describe the state after the final stage; a report is only
/// produced on full success, so they are always meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub chars_before: usize,
    pub chars_after: usize,
    pub changed: bool,
    pub steps: Vec<&'static str>,
}

impl Report {
    /// One-line human form: `Steps: strip, grep | Chars: 12 -> 7`.
    /// `-` stands in when no stage ran.
    pub fn summary(&self) -> String {
        let steps = if self.steps.is_empty() {
            "-".to_owned()
        } else {
            self.steps.join(", ")
        };
        format!(
            "Steps: {} | Chars: {} -> {}",
            steps, self.chars_before, self.chars_after
        )
    }
}

/// Ordered sequence of stages executed over one document.
///
/// Insertion order is execution order: no reordering, no deduplication. An
/// empty pipeline is legal and acts as the identity transform.
#[derive(Default)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent append: `Pipeline::new().append(Strip).append(Head::new(3))`.
    pub fn append<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in sequence over `doc`.
    ///
    /// Any stage failure is wrapped exactly once into
    /// [`PipelineError::StepFailure`] and aborts the run: no partial document
    /// or report escapes. On success the report lists every executed stage in
    /// order and the before/after accounting.
    pub fn run(&self, doc: &Document) -> Result<(Document, Report), PipelineError> {
        let mut current = doc.clone();
        let mut steps = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            current = stage
                .apply(&current)
                .map_err(|source| PipelineError::StepFailure {
                    stage: stage.name(),
                    source,
                })?;
            steps.push(stage.name());
        }

        let report = Report {
            chars_before: doc.char_count(),
            chars_after: current.char_count(),
            changed: current.content() != doc.content(),
            steps,
        };
        Ok((current, report))
    }
}
