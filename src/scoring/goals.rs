//! Goal-based scorers, usually composed after match points as tiebreakers

use super::scorer::{MetricScorer, SortOrder};
use crate::types::MatchScore;
use crate::utils::pluralize;

/// Goals scored minus goals conceded; higher ranks better
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalDifferenceMetricScorer;

impl MetricScorer for GoalDifferenceMetricScorer {
    fn name(&self) -> &'static str {
        "goal_difference"
    }

    fn default(&self) -> i64 {
        0
    }

    fn score(&self, match_score: &MatchScore) -> (i64, i64) {
        let diff = match_score.side_a().score() - match_score.side_b().score();
        (diff, -diff)
    }

    fn sort_order(&self) -> SortOrder {
        SortOrder::Descending
    }

    fn readable_string_from_metric(&self, metric: i64) -> String {
        if metric > 0 {
            format!("+{} GD", metric)
        } else {
            format!("{} GD", metric)
        }
    }
}

/// Total goals scored; higher ranks better
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalsScoredMetricScorer;

impl MetricScorer for GoalsScoredMetricScorer {
    fn name(&self) -> &'static str {
        "goals_scored"
    }

    fn default(&self) -> i64 {
        0
    }

    fn score(&self, match_score: &MatchScore) -> (i64, i64) {
        (match_score.side_a().score(), match_score.side_b().score())
    }

    fn sort_order(&self) -> SortOrder {
        SortOrder::Descending
    }

    fn readable_string_from_metric(&self, metric: i64) -> String {
        pluralize(metric, "goal", "goals")
    }
}
