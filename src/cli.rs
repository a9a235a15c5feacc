//! CLI argument parsing for wordsift

use crate::pipeline::{PipelineConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordsift")]
#[command(version)]
#[command(
    about = "Filter a dictionary word list down to lowercase singular words",
    long_about = None
)]
pub struct Cli {
    /// Newline-delimited word list to read
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "WORDSIFT_INPUT",
        default_value = DEFAULT_INPUT
    )]
    pub input: PathBuf,

    /// File to write the filtered list to (created or truncated)
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "WORDSIFT_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// Print per-stage word counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}
