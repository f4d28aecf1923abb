//! Match record types consumed by the ranking engine

use crate::error::{RankingError, Result};
use serde::{Deserialize, Serialize};

/// Unique identifier for a team
pub type TeamName = String;

/// Result of a match from the point of view of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Tie,
    Loss,
}

impl MatchOutcome {
    /// The outcome for the opposing side
    pub fn opposite(self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Tie => MatchOutcome::Tie,
            MatchOutcome::Loss => MatchOutcome::Win,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "WIN"),
            MatchOutcome::Tie => write!(f, "TIE"),
            MatchOutcome::Loss => write!(f, "LOSS"),
        }
    }
}

/// One team's score in a single match
///
/// Fields are private so the invariants checked in [`TeamGameScore::new`]
/// hold for every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamGameScore {
    team_name: TeamName,
    score: i64,
}

impl TeamGameScore {
    /// Create a team score, rejecting empty names and negative scores
    pub fn new(team_name: impl Into<TeamName>, score: i64) -> Result<Self> {
        let team_name = team_name.into();
        if team_name.is_empty() {
            return Err(RankingError::InvalidTeamScore {
                reason: "Name must be not empty".to_string(),
            }
            .into());
        }
        if score < 0 {
            return Err(RankingError::InvalidTeamScore {
                reason: format!("Score must be >= 0 (got {} for '{}')", score, team_name),
            }
            .into());
        }

        Ok(Self { team_name, score })
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// A two-team match result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchScore {
    side_a: TeamGameScore,
    side_b: TeamGameScore,
}

impl MatchScore {
    /// Create a match record; a team cannot play itself
    pub fn new(side_a: TeamGameScore, side_b: TeamGameScore) -> Result<Self> {
        if side_a.team_name == side_b.team_name {
            return Err(RankingError::SelfMatch {
                team_name: side_a.team_name,
            }
            .into());
        }

        Ok(Self { side_a, side_b })
    }

    /// Shorthand for building both sides and the match in one step
    pub fn from_parts(
        team_name_a: impl Into<TeamName>,
        score_a: i64,
        team_name_b: impl Into<TeamName>,
        score_b: i64,
    ) -> Result<Self> {
        Self::new(
            TeamGameScore::new(team_name_a, score_a)?,
            TeamGameScore::new(team_name_b, score_b)?,
        )
    }

    pub fn side_a(&self) -> &TeamGameScore {
        &self.side_a
    }

    pub fn side_b(&self) -> &TeamGameScore {
        &self.side_b
    }

    /// Classify the match from side A's point of view
    pub fn outcome_for_a(&self) -> MatchOutcome {
        match self.side_a.score.cmp(&self.side_b.score) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Tie,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// Classify the match from side B's point of view
    pub fn outcome_for_b(&self) -> MatchOutcome {
        self.outcome_for_a().opposite()
    }
}
