//! Match sources feeding the ranking engine
//!
//! A loader produces a finite, lazy sequence of match records. Errors may
//! appear mid-sequence; consumers are expected to stop at the first one.

pub mod parser;
pub mod reader;

// Re-export commonly used types
pub use parser::parse_match_score;
pub use reader::ReaderMatchScoresLoader;

use crate::error::Result;
use crate::types::MatchScore;

/// Trait for anything that can produce match records
pub trait MatchScoresLoader {
    /// Iterate match records in source order
    fn iter_match_scores(&mut self) -> Box<dyn Iterator<Item = Result<MatchScore>> + '_>;
}

/// Loader over records that were already validated and collected
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchScoresLoader {
    scores: Vec<MatchScore>,
}

impl InMemoryMatchScoresLoader {
    pub fn new(scores: Vec<MatchScore>) -> Self {
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl From<Vec<MatchScore>> for InMemoryMatchScoresLoader {
    fn from(scores: Vec<MatchScore>) -> Self {
        Self::new(scores)
    }
}

impl MatchScoresLoader for InMemoryMatchScoresLoader {
    fn iter_match_scores(&mut self) -> Box<dyn Iterator<Item = Result<MatchScore>> + '_> {
        Box::new(self.scores.iter().cloned().map(Ok::<MatchScore, anyhow::Error>))
    }
}
