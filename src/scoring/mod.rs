//! Pluggable scoring policies for the ranking engine
//!
//! This module provides the `MetricScorer` trait, the built-in scorers and
//! a small factory for building scorers from configuration names.

pub mod goals;
pub mod match_result;
pub mod scorer;

// Re-export commonly used types
pub use goals::{GoalDifferenceMetricScorer, GoalsScoredMetricScorer};
pub use match_result::{MatchResultMetricScorer, PointsTable};
pub use scorer::{MetricScorer, SortOrder};

use crate::error::RankingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Built-in scorer selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    MatchResult,
    GoalDifference,
    GoalsScored,
}

impl ScorerKind {
    /// Build the scorer; `points` only applies to `MatchResult`
    pub fn build(self, points: PointsTable) -> Box<dyn MetricScorer> {
        match self {
            ScorerKind::MatchResult => Box::new(MatchResultMetricScorer::with_points(points)),
            ScorerKind::GoalDifference => Box::new(GoalDifferenceMetricScorer),
            ScorerKind::GoalsScored => Box::new(GoalsScoredMetricScorer),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScorerKind::MatchResult => "match_result",
            ScorerKind::GoalDifference => "goal_difference",
            ScorerKind::GoalsScored => "goals_scored",
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "match_result" | "points" => Ok(ScorerKind::MatchResult),
            "goal_difference" | "gd" => Ok(ScorerKind::GoalDifference),
            "goals_scored" | "goals" => Ok(ScorerKind::GoalsScored),
            _ => Err(RankingError::UnknownScorer {
                name: s.to_string(),
            }),
        }
    }
}

/// Build scorers in priority order
pub fn build_scorers(kinds: &[ScorerKind], points: PointsTable) -> Vec<Box<dyn MetricScorer>> {
    kinds.iter().map(|kind| kind.build(points)).collect()
}
