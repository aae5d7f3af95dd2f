//! Core transformation stage abstraction.
//!
//! A [`Stage`] turns one [`Document`] into a new one, possibly failing. The
//! set of built-in stages is closed only by convention: anything implementing
//! the trait can be appended to a [`crate::Pipeline`], so callers register
//! custom stages without any further machinery.
//!
//! Line-oriented stages split on newline boundaries with [`str::lines`] and
//! rejoin with a single `\n`. Rejoining never appends a final terminator, so
//! a trailing newline present in the input is lost after any line-splitting
//! stage. This is intentional and relied upon by the built-in filters.

pub mod drop_empty;
pub mod grep;
pub mod head;
pub mod lowercase;
pub mod replace;
pub mod strip;
pub mod tail;

use crate::document::Document;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// A construction parameter violated the stage's precondition.
    #[error("invalid argument for stage `{stage}`: {message}")]
    InvalidArgument {
        stage: &'static str,
        message: String,
    },

    /// Any other failure raised while transforming a document.
    #[error("stage `{stage}` failed: {message}")]
    Failed {
        stage: &'static str,
        message: String,
    },
}

/// A single transformation step.
///
/// Implementations must be pure: no I/O, no shared mutable state, the same
/// input document always yields the same output. `path` and `category` are
/// carried over unchanged via [`Document::with_content`].
pub trait Stage: Send + Sync {
    /// Stable identifier, used in reports and error messages.
    fn name(&self) -> &'static str;

    /// Transform `doc` into a new document.
    fn apply(&self, doc: &Document) -> Result<Document, StageError>;
}
