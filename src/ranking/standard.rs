//! Standard competition ranking
//!
//! Teams are ordered by a decorated key: one component per configured scorer
//! (the team's total multiplied by the scorer's sort factor), followed by the
//! team name. Sorting that key ascending puts the best team first and breaks
//! ties alphabetically. Rank groups are formed on the metric components only,
//! so teams with equal totals share a rank and the next group skips ahead by
//! the size of the tie.

use super::standing::{Standing, TalliedMetric};
use super::TeamRanker;
use crate::error::{RankingError, Result};
use crate::loader::MatchScoresLoader;
use crate::scoring::MetricScorer;
use crate::types::{MatchScore, TeamName};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Ordering key for one team; field order defines the comparison
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey<'a> {
    metrics: Vec<i64>,
    team_name: &'a str,
}

impl SortKey<'_> {
    /// Key used for tie grouping. Without scorers there is nothing to tie on,
    /// so every team gets its own group.
    fn group_key(&self) -> Option<&[i64]> {
        if self.metrics.is_empty() {
            None
        } else {
            Some(&self.metrics)
        }
    }
}

/// Batch ranker producing "1224" standard competition rankings
///
/// Calling `load_scores` again without `clear` appends to the existing
/// totals rather than replacing them.
#[derive(Debug)]
pub struct StandardCompetitionRanker {
    teams: HashSet<TeamName>,
    metric_scorers: Vec<Box<dyn MetricScorer>>,
    /// Parallel to `metric_scorers`
    metric_totals: Vec<HashMap<TeamName, i64>>,
    /// Rank groups in order; teams within a group share a rank
    rankings: Vec<Vec<TeamName>>,
}

/// Add `delta` to `current`, failing when the sum or its sort key leaves `i64`
fn checked_total(scorer: &dyn MetricScorer, current: i64, delta: i64) -> Option<i64> {
    let total = current.checked_add(delta)?;
    total.checked_mul(scorer.sort_order().factor())?;
    Some(total)
}

impl StandardCompetitionRanker {
    /// Create a ranker with scorers in priority order
    pub fn new(metric_scorers: Vec<Box<dyn MetricScorer>>) -> Self {
        let metric_totals = metric_scorers.iter().map(|_| HashMap::new()).collect();
        Self {
            teams: HashSet::new(),
            metric_scorers,
            metric_totals,
            rankings: Vec::new(),
        }
    }

    pub fn metric_scorers(&self) -> &[Box<dyn MetricScorer>] {
        &self.metric_scorers
    }

    /// Number of distinct teams seen since the last clear
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Rank groups from the last successful load
    pub fn rank_groups(&self) -> &[Vec<TeamName>] {
        &self.rankings
    }

    /// A team's running total for the scorer at `scorer_index`
    pub fn metric_total(&self, scorer_index: usize, team_name: &str) -> Option<i64> {
        let scorer = self.metric_scorers.get(scorer_index)?;
        let totals = self.metric_totals.get(scorer_index)?;
        Some(
            totals
                .get(team_name)
                .copied()
                .unwrap_or_else(|| scorer.default()),
        )
    }

    fn accumulate(&mut self, match_score: &MatchScore) -> Result<()> {
        let name_a = match_score.side_a().team_name();
        let name_b = match_score.side_b().team_name();

        for name in [name_a, name_b] {
            if !self.teams.contains(name) {
                self.teams.insert(name.to_string());
            }
        }

        for (scorer, totals) in self.metric_scorers.iter().zip(self.metric_totals.iter_mut()) {
            let (delta_a, delta_b) = scorer.score(match_score);
            for (name, delta) in [(name_a, delta_a), (name_b, delta_b)] {
                let current = totals.get(name).copied().unwrap_or_else(|| scorer.default());
                let total = checked_total(scorer.as_ref(), current, delta).ok_or_else(|| {
                    RankingError::MetricOverflow {
                        team_name: name.to_string(),
                        scorer: scorer.name().to_string(),
                    }
                })?;
                totals.insert(name.to_string(), total);
            }
        }

        Ok(())
    }

    fn sort_key<'a>(&self, team_name: &'a str) -> SortKey<'a> {
        let metrics = self
            .metric_scorers
            .iter()
            .enumerate()
            .map(|(index, scorer)| {
                let total = self.metric_total(index, team_name).unwrap_or(0);
                scorer.sort_order().apply(total)
            })
            .collect();

        SortKey { metrics, team_name }
    }

    fn compute_rankings(&self) -> Vec<Vec<TeamName>> {
        let mut keys: Vec<SortKey<'_>> = self
            .teams
            .iter()
            .map(|team_name| self.sort_key(team_name))
            .collect();
        keys.sort();

        let mut rankings: Vec<Vec<TeamName>> = Vec::new();
        let mut previous: Option<&[i64]> = None;

        for key in &keys {
            let current = key.group_key();
            let same_group = matches!((previous, current), (Some(p), Some(c)) if p == c);
            previous = current;

            let team_name = key.team_name.to_string();
            if same_group {
                if let Some(group) = rankings.last_mut() {
                    group.push(team_name);
                    continue;
                }
            }
            rankings.push(vec![team_name]);
        }

        rankings
    }

    fn tallied_metrics(&self, team_name: &str) -> Vec<TalliedMetric> {
        self.metric_scorers
            .iter()
            .enumerate()
            .map(|(index, scorer)| {
                let value = self.metric_total(index, team_name).unwrap_or(0);
                TalliedMetric {
                    scorer: scorer.name().to_string(),
                    value,
                    display: scorer.readable_string_from_metric(value),
                }
            })
            .collect()
    }
}

impl TeamRanker for StandardCompetitionRanker {
    fn clear(&mut self) {
        for totals in &mut self.metric_totals {
            totals.clear();
        }
        self.rankings.clear();
        self.teams.clear();
    }

    fn load_scores(&mut self, loader: &mut dyn MatchScoresLoader) -> Result<()> {
        let mut loaded = 0usize;

        for match_score in loader.iter_match_scores() {
            let match_score = match match_score {
                Ok(match_score) => match_score,
                Err(e) => {
                    warn!(
                        "Aborting load after {} match scores, rankings not regenerated: {}",
                        loaded, e
                    );
                    return Err(e);
                }
            };
            if let Err(e) = self.accumulate(&match_score) {
                warn!(
                    "Aborting load after {} match scores, rankings not regenerated: {}",
                    loaded, e
                );
                return Err(e);
            }
            loaded += 1;
        }
        debug!("Accumulated {} match scores", loaded);

        self.rankings = self.compute_rankings();
        info!(
            "Ranked {} teams into {} rank groups",
            self.teams.len(),
            self.rankings.len()
        );

        Ok(())
    }

    fn standings(&self) -> Vec<Standing> {
        let mut standings = Vec::with_capacity(self.teams.len());
        let mut position = 1;

        for group in &self.rankings {
            let rank = position;
            for team_name in group {
                standings.push(Standing {
                    rank,
                    team_name: team_name.clone(),
                    metrics: self.tallied_metrics(team_name),
                });
                position += 1;
            }
        }

        standings
    }
}
