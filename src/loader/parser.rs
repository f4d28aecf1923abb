//! Line parser for match score records
//!
//! The accepted grammar is `<name a> <score a>, <name b> <score b>`, for
//! example `Lions 3, Snakes 3` or `Name With Spaces 1, Numb3r Nam3 0`.
//! Names may contain spaces and punctuation but must not start or end with
//! whitespace. Scores are unsigned decimal numbers.

use crate::error::{RankingError, Result};
use crate::types::{MatchScore, TeamGameScore};

/// Parse one input line into a match record
///
/// `line_number` is 1-based and only used for error reporting. When a name
/// itself contains `", "` the rightmost separator that yields two valid sides
/// is used.
pub fn parse_match_score(line: &str, line_number: usize) -> Result<MatchScore> {
    let (side_a, side_b) = split_sides(line).ok_or_else(|| RankingError::InvalidRecord {
        line: line_number,
        reason: format!("expected '<team> <score>, <team> <score>', got '{}'", line),
    })?;

    let team_score_a = team_game_score(side_a, line_number)?;
    let team_score_b = team_game_score(side_b, line_number)?;
    MatchScore::new(team_score_a, team_score_b)
}

type RawSide<'a> = (&'a str, &'a str);

fn split_sides(line: &str) -> Option<(RawSide<'_>, RawSide<'_>)> {
    line.rmatch_indices(", ").find_map(|(idx, sep)| {
        let side_a = parse_side(&line[..idx])?;
        let side_b = parse_side(&line[idx + sep.len()..])?;
        Some((side_a, side_b))
    })
}

fn parse_side(raw: &str) -> Option<RawSide<'_>> {
    let (name, digits) = raw.rsplit_once(' ')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if name.is_empty() || name.trim() != name {
        return None;
    }
    Some((name, digits))
}

fn team_game_score((name, digits): RawSide<'_>, line_number: usize) -> Result<TeamGameScore> {
    let score = digits
        .parse::<i64>()
        .map_err(|_| RankingError::InvalidRecord {
            line: line_number,
            reason: format!("score '{}' for '{}' is out of range", digits, name),
        })?;
    TeamGameScore::new(name, score)
}
