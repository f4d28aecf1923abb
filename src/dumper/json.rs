//! JSON Lines output of structured standings

use super::RankingDumper;
use crate::error::Result;
use crate::ranking::TeamRanker;
use anyhow::Context;
use std::io::Write;

/// Writes one serialized `Standing` per line
#[derive(Debug)]
pub struct JsonRankingDumper<W> {
    writer: W,
}

impl<W: Write> JsonRankingDumper<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RankingDumper for JsonRankingDumper<W> {
    fn dump_rankings(&mut self, ranker: &dyn TeamRanker) -> Result<()> {
        for standing in ranker.standings() {
            serde_json::to_writer(&mut self.writer, &standing)
                .with_context(|| format!("Failed to serialize standing for {}", standing.team_name))?;
            self.writer
                .write_all(b"\n")
                .context("Failed to write ranking line")?;
        }
        self.writer.flush().context("Failed to flush ranking output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::InMemoryMatchScoresLoader;
    use crate::ranking::{Standing, StandardCompetitionRanker};
    use crate::scoring::MatchResultMetricScorer;
    use crate::types::MatchScore;

    #[test]
    fn test_json_lines_output() {
        let mut ranker =
            StandardCompetitionRanker::new(vec![Box::new(MatchResultMetricScorer::new())]);
        let mut loader = InMemoryMatchScoresLoader::new(vec![
            MatchScore::from_parts("Lions", 3, "Snakes", 3).unwrap(),
            MatchScore::from_parts("Tarantulas", 1, "FC Awesome", 0).unwrap(),
        ]);
        ranker.load_scores(&mut loader).unwrap();

        let mut dumper = JsonRankingDumper::new(Vec::new());
        dumper.dump_rankings(&ranker).unwrap();
        let output = String::from_utf8(dumper.into_inner()).unwrap();

        let standings: Vec<Standing> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(standings, ranker.standings());
        assert_eq!(standings.len(), 4);
        assert_eq!(standings[0].team_name, "Tarantulas");
        assert_eq!(standings[0].metrics[0].display, "3 pts");

        let first: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(first["rank"], 1);
        assert_eq!(first["metrics"][0]["scorer"], "match_result");
    }

    #[test]
    fn test_json_empty_ranking() {
        let ranker = StandardCompetitionRanker::new(vec![]);
        let mut dumper = JsonRankingDumper::new(Vec::new());
        dumper.dump_rankings(&ranker).unwrap();
        assert!(dumper.into_inner().is_empty());
    }
}
