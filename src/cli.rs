//! Command-line driver: option parsing, pipeline assembly, output writing.
//!
//! Stage flags are applied in a fixed precedence order (strip, lowercase,
//! replace, drop_empty, grep, head, tail) regardless of the order the flags
//! appear on the command line.

use crate::{
    loader::{self, LoaderError},
    pipeline::{Pipeline, PipelineError},
    stage::{
        drop_empty::DropEmpty, grep::Grep, head::Head, lowercase::Lowercase, replace::Replace,
        strip::Strip, tail::Tail,
    },
};
use clap::{Args, Parser, Subcommand};
use std::io::Write as _;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("failed to write output to `{path}`")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout")]
    Stdout(#[source] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "fileflow",
    version,
    about = "Process a text file through a configurable pipeline of stages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the stage pipeline on an input file
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the input file
    pub input: PathBuf,

    /// Path to the output file (prints to stdout when omitted)
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Trim whitespace on each line
    #[arg(long)]
    pub strip: bool,

    /// Convert the content to lowercase
    #[arg(long)]
    pub lower: bool,

    /// Replace substring OLD with NEW
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"])]
    pub replace: Option<Vec<String>>,

    /// Drop empty lines
    #[arg(long = "drop-empty")]
    pub drop_empty: bool,

    /// Keep only lines that contain SUBSTR
    #[arg(long, value_name = "SUBSTR")]
    pub grep: Option<String>,

    /// Keep only the first N lines
    #[arg(long, value_name = "N", value_parser = positive_count, allow_negative_numbers = true)]
    pub head: Option<i64>,

    /// Keep only the last N lines
    #[arg(long, value_name = "N", value_parser = positive_count, allow_negative_numbers = true)]
    pub tail: Option<i64>,
}

fn positive_count(raw: &str) -> Result<i64, String> {
    let n: i64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not an integer"))?;
    if n <= 0 {
        return Err("N must be a positive integer".to_owned());
    }
    Ok(n)
}

/// Assemble the pipeline in the fixed precedence order.
pub fn build_pipeline(args: &RunArgs) -> Pipeline {
    let mut pipeline = Pipeline::new();
    if args.strip {
        pipeline = pipeline.append(Strip);
    }
    if args.lower {
        pipeline = pipeline.append(Lowercase);
    }
    if let Some(pair) = &args.replace {
        pipeline = pipeline.append(Replace::new(&pair[0], &pair[1]));
    }
    if args.drop_empty {
        pipeline = pipeline.append(DropEmpty);
    }
    if let Some(pattern) = &args.grep {
        pipeline = pipeline.append(Grep::new(pattern));
    }
    if let Some(n) = args.head {
        pipeline = pipeline.append(Head::new(n));
    }
    if let Some(n) = args.tail {
        pipeline = pipeline.append(Tail::new(n));
    }
    pipeline
}

/// Load, run, report, write. The report goes to stderr so stdout stays clean
/// for the content itself.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let doc = loader::load(&args.input)?;
    let pipeline = build_pipeline(&args);
    let (result, report) = pipeline.run(&doc)?;

    eprintln!("{}", report.summary());

    match &args.output {
        Some(path) => {
            // File output is verbatim, no implicit trailing newline.
            std::fs::write(path, result.content()).map_err(|source| CliError::WriteOutput {
                path: path.display().to_string(),
                source,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(result.content().as_bytes())
                .map_err(CliError::Stdout)?;
            if !result.content().is_empty() && !result.content().ends_with('\n') {
                stdout.write_all(b"\n").map_err(CliError::Stdout)?;
            }
        }
    }
    Ok(())
}

/// Render an error and its source chain on one line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    use std::fmt::Write as _;
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, ": {cause}");
        source = cause.source();
    }
    rendered
}
