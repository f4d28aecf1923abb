//! Plain text ranking lines

use super::RankingDumper;
use crate::error::Result;
use crate::ranking::TeamRanker;
use anyhow::Context;
use std::io::Write;

/// Writes each ranking line followed by a newline, flushing per line
#[derive(Debug)]
pub struct TextRankingDumper<W> {
    writer: W,
}

impl<W: Write> TextRankingDumper<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RankingDumper for TextRankingDumper<W> {
    fn dump_rankings(&mut self, ranker: &dyn TeamRanker) -> Result<()> {
        for line in ranker.iter_rankings() {
            writeln!(self.writer, "{}", line).context("Failed to write ranking line")?;
            self.writer.flush().context("Failed to flush ranking output")?;
        }
        Ok(())
    }
}
