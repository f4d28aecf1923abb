//! Ranking configuration

use crate::scoring::{build_scorers, MetricScorer, PointsTable, ScorerKind};
use serde::{Deserialize, Serialize};

/// Which scorers to rank by, and how match points are awarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Scorers in priority order; empty ranks alphabetically with no metrics
    pub scorers: Vec<ScorerKind>,
    /// Points table for the `match_result` scorer
    pub points: PointsTable,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            scorers: vec![ScorerKind::MatchResult],
            points: PointsTable::default(),
        }
    }
}

impl RankingSettings {
    /// Instantiate the configured scorers
    pub fn build_scorers(&self) -> Vec<Box<dyn MetricScorer>> {
        build_scorers(&self.scorers, self.points)
    }
}
