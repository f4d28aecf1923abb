//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use league_ranker::error::{RankingError, Result};
use league_ranker::loader::{MatchScoresLoader, ReaderMatchScoresLoader};
use league_ranker::ranking::{StandardCompetitionRanker, TeamRanker};
use league_ranker::scoring::{build_scorers, PointsTable, ScorerKind};
use league_ranker::types::MatchScore;
use std::io::Cursor;

/// The sample season used throughout the docs
pub const SAMPLE_SEASON: &str = "\
Lions 3, Snakes 3
Tarantulas 1, FC Awesome 0
Lions 1, FC Awesome 1
Tarantulas 3, Snakes 1
Lions 4, Grouches 0
";

pub const SAMPLE_SEASON_RANKING: [&str; 5] = [
    "1. Tarantulas, 6 pts",
    "2. Lions, 5 pts",
    "3. FC Awesome, 1 pt",
    "3. Snakes, 1 pt",
    "5. Grouches, 0 pts",
];

/// Mock loader that replays records, optionally failing after them
#[derive(Debug, Default)]
pub struct MockScoreLoader {
    scores: Vec<MatchScore>,
    failure: Option<RankingError>,
    pub iterations: usize,
}

impl MockScoreLoader {
    pub fn new(records: &[(&str, i64, &str, i64)]) -> Self {
        Self {
            scores: records
                .iter()
                .map(|(a, sa, b, sb)| MatchScore::from_parts(*a, *sa, *b, *sb).unwrap())
                .collect(),
            failure: None,
            iterations: 0,
        }
    }

    /// Fail with `failure` once every record has been produced
    pub fn failing_with(mut self, failure: RankingError) -> Self {
        self.failure = Some(failure);
        self
    }
}

impl MatchScoresLoader for MockScoreLoader {
    fn iter_match_scores(&mut self) -> Box<dyn Iterator<Item = Result<MatchScore>> + '_> {
        self.iterations += 1;
        let failure = self
            .failure
            .clone()
            .map(|e| Err::<MatchScore, anyhow::Error>(e.into()));
        Box::new(
            self.scores
                .iter()
                .cloned()
                .map(Ok::<MatchScore, anyhow::Error>)
                .chain(failure),
        )
    }
}

/// Ranker with the given built-in scorers and the default points table
pub fn ranker_with(kinds: &[ScorerKind]) -> StandardCompetitionRanker {
    StandardCompetitionRanker::new(build_scorers(kinds, PointsTable::default()))
}

/// Run text input through a fresh ranker and return the ranking lines
pub fn rank_text(input: &str, kinds: &[ScorerKind]) -> Result<Vec<String>> {
    let mut ranker = ranker_with(kinds);
    let mut loader = ReaderMatchScoresLoader::new(Cursor::new(input.as_bytes().to_vec()));
    ranker.load_scores(&mut loader)?;
    Ok(ranker.iter_rankings().collect())
}
