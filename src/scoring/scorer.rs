//! Metric scorer trait and sort direction
//!
//! A metric scorer turns one match into a pair of integer deltas, one per
//! side. The ranker sums those deltas per team and orders teams by the totals,
//! scorer by scorer in priority order.

use crate::types::MatchScore;
use serde::{Deserialize, Serialize};

/// Direction in which a tallied metric maps to rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lower totals rank better
    Ascending,
    /// Higher totals rank better
    Descending,
}

impl SortOrder {
    /// `+1` for ascending, `-1` for descending
    pub fn factor(self) -> i64 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }

    /// Map a tallied value onto a key where ascending order is best-first
    pub fn apply(self, value: i64) -> i64 {
        value * self.factor()
    }
}

/// Trait for scoring one dimension of a team's performance
///
/// Implementations must be stateless: `score` sees only the match it is given.
pub trait MetricScorer: Send + Sync {
    /// Stable identifier used in configuration and structured output
    fn name(&self) -> &'static str;

    /// Value a team with no contributing matches starts at
    fn default(&self) -> i64;

    /// Contributions of a single match to side A and side B
    fn score(&self, match_score: &MatchScore) -> (i64, i64);

    /// Direction in which totals map to rank
    fn sort_order(&self) -> SortOrder;

    /// Human-readable rendering of a tallied value
    fn readable_string_from_metric(&self, metric: i64) -> String;
}

impl std::fmt::Debug for dyn MetricScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricScorer")
            .field("name", &self.name())
            .field("sort_order", &self.sort_order())
            .finish()
    }
}
