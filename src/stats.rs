//! Per-stage word counts for --stats mode

use std::fmt;

/// How many words each pipeline stage saw and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the input word list
    pub loaded: usize,
    /// Words dropped by the alphabet filter
    pub rejected_alphabet: usize,
    /// Words dropped as plurals of another candidate
    pub rejected_plural: usize,
    /// Words written to the output file
    pub written: usize,
}

impl FilterStats {
    /// Derive stage counts from the size of each intermediate list
    pub fn from_stages(loaded: usize, candidates: usize, kept: usize) -> Self {
        Self {
            loaded,
            rejected_alphabet: loaded - candidates,
            rejected_plural: candidates - kept,
            written: kept,
        }
    }

    /// Print the stage summary to stderr
    pub fn print_summary(&self) {
        eprint!("{}", self);
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "loaded:              {}", self.loaded)?;
        writeln!(f, "rejected (alphabet): {}", self.rejected_alphabet)?;
        writeln!(f, "rejected (plural):   {}", self.rejected_plural)?;
        writeln!(f, "written:             {}", self.written)
    }
}
