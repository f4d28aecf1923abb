//! Ranking sinks
//!
//! Dumpers write a ranker's output somewhere, one line per team.

pub mod json;
pub mod text;

// Re-export commonly used types
pub use json::JsonRankingDumper;
pub use text::TextRankingDumper;

use crate::error::Result;
use crate::ranking::TeamRanker;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for writing out a ranker's current rankings
pub trait RankingDumper {
    fn dump_rankings(&mut self, ranker: &dyn TeamRanker) -> Result<()>;
}

/// Output format selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `"1. Team, 6 pts"` lines
    #[default]
    Text,
    /// One JSON object per standing per line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::RankingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(crate::error::RankingError::ConfigurationError {
                message: format!("Invalid output format: {} (use 'text' or 'json')", s),
            }),
        }
    }
}

/// Build a dumper for `format` over `writer`
pub fn dumper_for<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn RankingDumper + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextRankingDumper::new(writer)),
        OutputFormat::Json => Box::new(JsonRankingDumper::new(writer)),
    }
}
