pub mod cli;
pub mod document;
pub mod loader;
pub mod pipeline;
pub mod stage;

pub use document::{Category, Document};
pub use loader::LoaderError;
pub use pipeline::{Pipeline, PipelineError, Report};
pub use stage::drop_empty::DropEmpty;
pub use stage::grep::Grep;
pub use stage::head::Head;
pub use stage::lowercase::Lowercase;
pub use stage::replace::Replace;
pub use stage::strip::Strip;
pub use stage::tail::Tail;
pub use stage::{Stage, StageError};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
