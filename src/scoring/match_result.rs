//! Win/tie/loss points scorer

use super::scorer::{MetricScorer, SortOrder};
use crate::types::{MatchOutcome, MatchScore};
use crate::utils::pluralize;
use serde::{Deserialize, Serialize};

/// Points awarded per match outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsTable {
    pub win: i64,
    pub tie: i64,
    pub loss: i64,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            win: 3,
            tie: 1,
            loss: 0,
        }
    }
}

impl PointsTable {
    pub fn points_for(&self, outcome: MatchOutcome) -> i64 {
        match outcome {
            MatchOutcome::Win => self.win,
            MatchOutcome::Tie => self.tie,
            MatchOutcome::Loss => self.loss,
        }
    }
}

/// Awards league points by match outcome; more points rank better
#[derive(Debug, Clone, Default)]
pub struct MatchResultMetricScorer {
    points: PointsTable,
}

impl MatchResultMetricScorer {
    pub fn new() -> Self {
        Self::with_points(PointsTable::default())
    }

    /// Create a scorer with a custom points table
    pub fn with_points(points: PointsTable) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &PointsTable {
        &self.points
    }
}

impl MetricScorer for MatchResultMetricScorer {
    fn name(&self) -> &'static str {
        "match_result"
    }

    fn default(&self) -> i64 {
        0
    }

    fn score(&self, match_score: &MatchScore) -> (i64, i64) {
        (
            self.points.points_for(match_score.outcome_for_a()),
            self.points.points_for(match_score.outcome_for_b()),
        )
    }

    fn sort_order(&self) -> SortOrder {
        SortOrder::Descending
    }

    fn readable_string_from_metric(&self, metric: i64) -> String {
        pluralize(metric, "pt", "pts")
    }
}
