//! Match score loader over any buffered reader (files, stdin, in-memory buffers)

use super::parser::parse_match_score;
use super::MatchScoresLoader;
use crate::error::Result;
use crate::types::MatchScore;
use anyhow::Context;
use std::io::{BufRead, Lines};
use std::iter::Enumerate;
use tracing::debug;

/// Reads one match record per line from a `BufRead`
#[derive(Debug)]
pub struct ReaderMatchScoresLoader<R> {
    reader: R,
}

impl<R: BufRead> ReaderMatchScoresLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> MatchScoresLoader for ReaderMatchScoresLoader<R> {
    fn iter_match_scores(&mut self) -> Box<dyn Iterator<Item = Result<MatchScore>> + '_> {
        Box::new(MatchScoreLines {
            lines: (&mut self.reader).lines().enumerate(),
            finished: false,
        })
    }
}

/// Lazy line-by-line parse; ends after the first error
struct MatchScoreLines<'a, R> {
    lines: Enumerate<Lines<&'a mut R>>,
    finished: bool,
}

impl<R: BufRead> Iterator for MatchScoreLines<'_, R> {
    type Item = Result<MatchScore>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (index, line) = self.lines.next()?;
            let line_number = index + 1;

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.finished = true;
                    return Some(
                        Err::<MatchScore, _>(e)
                            .with_context(|| format!("Failed to read input line {}", line_number)),
                    );
                }
            };

            if line.is_empty() {
                debug!("Skipping empty input line {}", line_number);
                continue;
            }

            let parsed = parse_match_score(&line, line_number);
            if parsed.is_err() {
                self.finished = true;
            }
            return Some(parsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankingError;
    use std::io::Cursor;

    fn loader(input: &str) -> ReaderMatchScoresLoader<Cursor<Vec<u8>>> {
        ReaderMatchScoresLoader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_iter_match_scores_empty() {
        let mut loader = loader("");
        assert_eq!(loader.iter_match_scores().count(), 0);

        let mut loader = self::loader("\n");
        assert_eq!(loader.iter_match_scores().count(), 0);
    }

    #[test]
    fn test_iter_match_scores_valid() {
        let mut loader = loader(
            "Foo 1, Bar 1\nName With Spaces 1, Numb3r Nam3 0\r\nSpecialCh@r 6, Numb3r Nam3 1",
        );

        let scores: Vec<MatchScore> = loader
            .iter_match_scores()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            scores,
            vec![
                MatchScore::from_parts("Foo", 1, "Bar", 1).unwrap(),
                MatchScore::from_parts("Name With Spaces", 1, "Numb3r Nam3", 0).unwrap(),
                MatchScore::from_parts("SpecialCh@r", 6, "Numb3r Nam3", 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_iter_match_scores_stops_after_invalid_line() {
        for invalid in [
            "  InvalidWithLeadingSpace 1, Bar 1",
            "SpecialCh@r 6, InvalidWithTrailingSpace   1",
            "Something totally wrong",
            "Foo -1, Bar 1",
            "Bar 0, Baz -1",
        ] {
            let mut loader = loader(&format!("Foo 20, Bar 5\n{}\nFoo 1, Bar 0", invalid));
            let mut iter = loader.iter_match_scores();

            let valid = iter.next().unwrap().unwrap();
            assert_eq!(valid, MatchScore::from_parts("Foo", 20, "Bar", 5).unwrap());

            let err = iter.next().unwrap().unwrap_err();
            assert!(matches!(
                err.downcast_ref::<RankingError>(),
                Some(RankingError::InvalidRecord { line: 2, .. })
            ));

            // Nothing is produced after the first error
            assert!(iter.next().is_none());
        }
    }

    #[test]
    fn test_iter_match_scores_self_match() {
        let mut loader = loader("Foo 20, Bar 5\nBaz 1, Baz 2");
        let mut iter = loader.iter_match_scores();

        assert!(iter.next().unwrap().is_ok());
        let err = iter.next().unwrap().unwrap_err();
        assert!(err
            .to_string()
            .contains("A valid match must contain mutually exclusive team scores"));
        assert!(iter.next().is_none());
    }
}
