//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! league-ranker, including TOML file and environment variable loading and
//! validation.

use super::ranking::RankingSettings;
use crate::dumper::OutputFormat;
use crate::scoring::ScorerKind;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub ranking: RankingSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "league-ranker".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file; missing sections take defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Ranking settings
        if let Ok(scorers) = env::var("RANKING_SCORERS") {
            config.ranking.scorers = parse_scorer_list(&scorers)?;
        }
        if let Ok(win) = env::var("POINTS_WIN") {
            config.ranking.points.win = win
                .parse()
                .map_err(|_| anyhow!("Invalid POINTS_WIN value: {}", win))?;
        }
        if let Ok(tie) = env::var("POINTS_TIE") {
            config.ranking.points.tie = tie
                .parse()
                .map_err(|_| anyhow!("Invalid POINTS_TIE value: {}", tie))?;
        }
        if let Ok(loss) = env::var("POINTS_LOSS") {
            config.ranking.points.loss = loss
                .parse()
                .map_err(|_| anyhow!("Invalid POINTS_LOSS value: {}", loss))?;
        }

        // Output settings
        if let Ok(format) = env::var("OUTPUT_FORMAT") {
            config.output.format = format.parse()?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse a comma-separated scorer list; blank means no scorers
pub fn parse_scorer_list(raw: &str) -> Result<Vec<ScorerKind>> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<ScorerKind>().map_err(Into::into))
        .collect()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate points table
    let points = &config.ranking.points;
    if points.loss < 0 {
        return Err(anyhow!("Points for a loss cannot be negative"));
    }
    if points.tie < points.loss {
        return Err(anyhow!("Points for a tie must be at least the points for a loss"));
    }
    if points.win < points.tie {
        return Err(anyhow!("Points for a win must be at least the points for a tie"));
    }

    Ok(())
}
