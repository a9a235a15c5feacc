//! Load → alphabet filter → singularity filter → write

use crate::error::Result;
use crate::filter::{alphabet_filter, singularity_filter};
use crate::stats::FilterStats;
use crate::wordlist;
use std::path::PathBuf;
use tracing::{debug, info};

/// Default input: the system dictionary
pub const DEFAULT_INPUT: &str = "/usr/share/dict/american-english";
/// Default output, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "wasm/words.txt";

/// File locations for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Filter an in-memory word list, returning survivors in input order
pub fn sift<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    let candidates = alphabet_filter(words);
    singularity_filter(&candidates)
}

/// Run the whole pipeline against the configured files
///
/// The output file is only created once the input has been read and
/// filtered, so an input failure never touches it.
pub fn run(config: &PipelineConfig) -> Result<FilterStats> {
    info!(input = %config.input.display(), "loading word list");
    let words = wordlist::load(&config.input)?;

    let candidates = alphabet_filter(&words);
    debug!(candidates = candidates.len(), "alphabet filter done");

    let kept = singularity_filter(&candidates);
    debug!(kept = kept.len(), "singularity filter done");

    let stats = FilterStats::from_stages(words.len(), candidates.len(), kept.len());

    let written = wordlist::save(&config.output, &kept)?;
    info!(output = %config.output.display(), written, "word list written");
    debug_assert_eq!(written, stats.written);

    Ok(stats)
}
