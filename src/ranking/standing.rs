//! Ranked output rows

use crate::types::TeamName;
use serde::{Deserialize, Serialize};

/// One scorer's tally for a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalliedMetric {
    /// Name of the scorer that produced the value
    pub scorer: String,
    pub value: i64,
    /// Rendering from `MetricScorer::readable_string_from_metric`
    pub display: String,
}

/// A team's position in the ranking
///
/// Displays as `"{rank}. {team_name}"` followed by `", "` and each metric's
/// rendering, in scorer order. With no scorers the metrics part is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub team_name: TeamName,
    pub metrics: Vec<TalliedMetric>,
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.rank, self.team_name)?;
        for metric in &self.metrics {
            write!(f, ", {}", metric.display)?;
        }
        Ok(())
    }
}
