//! Team ranking engine
//!
//! This module provides the `TeamRanker` interface and the standard
//! competition ("1224") ranker built on pluggable metric scorers.

pub mod standard;
pub mod standing;

// Re-export commonly used types
pub use standard::StandardCompetitionRanker;
pub use standing::{Standing, TalliedMetric};

use crate::error::Result;
use crate::loader::MatchScoresLoader;

/// Trait for batch rankers over match records
pub trait TeamRanker {
    /// Reset to the empty state
    fn clear(&mut self);

    /// Drain the loader, accumulate every record and regenerate rankings
    ///
    /// Any error from the loader aborts the load and is returned as-is;
    /// rankings are only regenerated after the loader is fully drained.
    fn load_scores(&mut self, loader: &mut dyn MatchScoresLoader) -> Result<()>;

    /// Structured rows of the last computed ranking, best first
    fn standings(&self) -> Vec<Standing>;

    /// Formatted ranking lines, one per team
    fn iter_rankings(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.standings().into_iter().map(|standing| standing.to_string()))
    }
}
