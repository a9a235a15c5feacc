//! Error taxonomy for the word filter pipeline
//!
//! Every failure is fatal: an unreadable input aborts before the output is
//! touched, and an unwritable output aborts before success is reported.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while sifting a word list
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Failed to read input word list {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output word list {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SiftError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiftError>;
