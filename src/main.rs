//! Main entry point for the league-ranker CLI
//!
//! Reads match results from a file or stdin, one per line, and prints the
//! ranking table to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use league_ranker::config::AppConfig;
use league_ranker::dumper::{dumper_for, OutputFormat};
use league_ranker::loader::{MatchScoresLoader, ReaderMatchScoresLoader};
use league_ranker::ranking::{StandardCompetitionRanker, TeamRanker};
use league_ranker::scoring::ScorerKind;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// League Ranker - standard competition rankings from match results
#[derive(Parser)]
#[command(
    name = "league-ranker",
    version,
    about = "Rank teams from match results using standard competition ranking",
    long_about = "Reads match results in the form '<team> <score>, <team> <score>', one per line, \
                 from INPUT or stdin, and prints the ranking table. Tied teams share a rank and \
                 the next rank skips ahead by the size of the tie."
)]
struct Args {
    /// Input file (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Scorer override, repeatable, in priority order
    #[arg(
        short,
        long = "scorer",
        value_name = "KIND",
        help = "Rank by this scorer (match_result, goal_difference, goals_scored); repeat to add tiebreakers"
    )]
    scorers: Vec<ScorerKind>,

    /// Rank alphabetically without any scorer
    #[arg(long, conflicts_with = "scorers", help = "Rank without any metric scorer")]
    no_scorers: bool,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "Output format (text or json)")]
    format: Option<OutputFormat>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading input")]
    dry_run: bool,
}

/// Initialize structured logging on stderr with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if args.no_scorers {
        config.ranking.scorers.clear();
    } else if !args.scorers.is_empty() {
        config.ranking.scorers = args.scorers.clone();
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    league_ranker::config::validate_config(&config)?;
    Ok(config)
}

fn display_config(config: &AppConfig) {
    let scorers: Vec<String> = config
        .ranking
        .scorers
        .iter()
        .map(ToString::to_string)
        .collect();
    info!("League Ranker v{}", league_ranker::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Scorers: [{}]", scorers.join(", "));
    info!(
        "   Points: win={} tie={} loss={}",
        config.ranking.points.win, config.ranking.points.tie, config.ranking.points.loss
    );
    info!("   Output: {}", config.output.format);
}

/// Load every match record, then write the ranking to stdout
fn run(config: &AppConfig, input: Option<&PathBuf>) -> Result<()> {
    let mut ranker = StandardCompetitionRanker::new(config.ranking.build_scorers());

    let mut loader: Box<dyn MatchScoresLoader> = match input {
        Some(path) => {
            debug!("Reading match scores from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Box::new(ReaderMatchScoresLoader::new(BufReader::new(file)))
        }
        None => {
            debug!("Reading match scores from stdin");
            Box::new(ReaderMatchScoresLoader::new(io::stdin().lock()))
        }
    };
    ranker.load_scores(loader.as_mut())?;

    let stdout = io::stdout();
    let mut dumper = dumper_for(config.output.format, stdout.lock());
    dumper.dump_rankings(&ranker)?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(2);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_config(&config);

    if args.dry_run {
        info!("Dry run completed - configuration is valid");
        return Ok(());
    }

    if let Err(e) = run(&config, args.input.as_ref()) {
        error!("Ranking failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
