//! wordsift - filter a dictionary word list down to lowercase singular words
//!
//! The pipeline loads a newline-delimited word list, keeps only words made of
//! `a`-`z`, drops words that look like the plural of another kept word, and
//! writes the survivors one per line.

pub mod cli;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod stats;
pub mod wordlist;

pub use error::SiftError;
pub use pipeline::{run, sift, PipelineConfig};
pub use stats::FilterStats;
