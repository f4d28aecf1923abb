//! Error types for the ranking engine
//!
//! Typed failures are raised as `RankingError` and carried through the crate
//! as `anyhow::Error`, so callers can either bubble them up with `?` or
//! recover the variant with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ranking scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("Invalid team score: {reason}")]
    InvalidTeamScore { reason: String },

    #[error("A valid match must contain mutually exclusive team scores (team '{team_name}' cannot play itself)")]
    SelfMatch { team_name: String },

    #[error("Invalid match score found in input at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Total for metric '{scorer}' overflowed for team '{team_name}'")]
    MetricOverflow { team_name: String, scorer: String },

    #[error("Unknown metric scorer: {name}")]
    UnknownScorer { name: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
