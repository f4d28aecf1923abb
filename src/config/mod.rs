//! Configuration management for the league-ranker
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod ranking;

// Re-export commonly used types
pub use app::{parse_scorer_list, validate_config, AppConfig, OutputSettings, ServiceSettings};
pub use ranking::RankingSettings;
