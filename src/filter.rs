//! Word filtering for dictionary lists
//!
//! Two passes run over the loaded list:
//! - Alphabet filter: keep words made only of `a`-`z` (drops proper nouns,
//!   possessives like "accuser's", digits, whitespace)
//! - Singularity filter: drop a word ending in `s` when its `s`-stripped
//!   form is another candidate ("cats" goes when "cat" is present)
//!
//! The plural check is a membership heuristic, not morphology. "bus" is
//! dropped if "bu" is a candidate; "glass" survives because "glas" is not.

use std::collections::HashSet;
use tracing::{debug, trace};

/// Returns true if `word` is one or more lowercase ASCII letters
pub fn is_lowercase_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Keep only words made entirely of `a`-`z`, preserving input order
pub fn alphabet_filter<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| is_lowercase_word(word))
        .collect()
}

/// Lookup set of candidate words used by the singularity filter
///
/// Built once from the full candidate list and never mutated afterwards,
/// so dropping a plural cannot change the outcome for a later word.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary<'a> {
    words: HashSet<&'a str>,
}

impl<'a> Vocabulary<'a> {
    pub fn new(candidates: &[&'a str]) -> Self {
        Self {
            words: candidates.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A word is singular unless it ends in `s` and its stem is a known word
    pub fn is_singular(&self, word: &str) -> bool {
        match word.strip_suffix('s') {
            None => true,
            Some(stem) => !self.contains(stem),
        }
    }
}

/// Drop candidates that look like the plural of another candidate
pub fn singularity_filter<'a>(candidates: &[&'a str]) -> Vec<&'a str> {
    let vocabulary = Vocabulary::new(candidates);
    if vocabulary.is_empty() {
        return Vec::new();
    }
    debug!(distinct = vocabulary.len(), "built candidate vocabulary");

    candidates
        .iter()
        .copied()
        .filter(|word| {
            let keep = vocabulary.is_singular(word);
            if !keep {
                trace!(word, "dropping plural");
            }
            keep
        })
        .collect()
}
