//! League Ranker - standard competition rankings from match results
//!
//! This crate accumulates per-team metrics from a batch of two-team match
//! records using pluggable scorers, and produces a "1224" ranking where tied
//! teams share a rank.

pub mod config;
pub mod dumper;
pub mod error;
pub mod loader;
pub mod ranking;
pub mod scoring;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankingError, Result};
pub use types::*;

// Re-export key components
pub use dumper::{RankingDumper, TextRankingDumper};
pub use loader::{InMemoryMatchScoresLoader, MatchScoresLoader, ReaderMatchScoresLoader};
pub use ranking::{StandardCompetitionRanker, TeamRanker};
pub use scoring::{MatchResultMetricScorer, MetricScorer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
