//! Main entry point for the league ratings command line tool
//!
//! Reads a batch of box scores, rates every game and writes the game
//! reports as JSON.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use league_ratings::config::AppConfig;
use league_ratings::game::{process_batch, GameInput, GameProcessor};
use league_ratings::metrics::MetricsCollector;
use league_ratings::rating::{EloEngine, RatingCalculator};
use league_ratings::DivisionTier;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// League Ratings - team Elo and player scoring from box scores
#[derive(Parser)]
#[command(
    name = "league-ratings",
    version,
    about = "Rate league games and score players from uploaded box scores",
    long_about = "League Ratings reads a JSON array of games with per-player box score rows, \
                 normalizes every stat line, computes passer ratings and fantasy points, \
                 and updates both teams' Elo ratings with a dynamic K-factor."
)]
struct Args {
    /// Input file with a JSON array of games
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to a JSON array of games, or - for stdin"
    )]
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

    /// Season override
    #[arg(long, value_name = "SEASON", help = "Override the season number")]
    season: Option<u32>,

    /// Division override
    #[arg(long, value_name = "TIER", help = "Override the league division (1 or 2)")]
    division: Option<u8>,

    /// Output file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write game reports to this file instead of stdout"
    )]
    output: Option<PathBuf>,

    /// Print metrics after the run
    #[arg(long, help = "Print Prometheus metrics to stderr after the run")]
    metrics: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without rating games")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display run information
fn display_banner(config: &AppConfig) {
    info!("League Ratings v{}", league_ratings::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!(
        "   Season {} {} ({} teams)",
        config.league.season, config.league.division, config.league.teams
    );
    info!(
        "   Elo K-factor: {} (default rating {})",
        config.rating.k_factor, config.rating.default_rating
    );
}

/// Load and merge configuration from file, environment and CLI arguments
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

    if let Some(season) = args.season {
        config.league.season = season;
    }

    if let Some(division) = args.division {
        config.league.division = DivisionTier::try_from(division)?;
    }

    league_ratings::config::validate_config(&config)?;
    Ok(config)
}

/// Read the games to rate from a file or stdin
fn read_games(input: &Path) -> Result<Vec<GameInput>> {
    let raw = if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read games from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read games from {}", input.display()))?
    };

    serde_json::from_str(&raw).context("Input is not a JSON array of games")
}

/// Write the reports as pretty JSON
fn write_reports<T: serde::Serialize>(reports: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;

    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write reports to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_banner(&config);
        info!("Dry run completed - exiting without rating games");
        return Ok(());
    }

    display_banner(&config);

    let input = args
        .input
        .as_deref()
        .ok_or_else(|| anyhow!("No input given, pass --input <FILE> or --input -"))?;
    let games = read_games(input)?;
    info!("Loaded {} games from {}", games.len(), input.display());

    let metrics = Arc::new(MetricsCollector::new()?);
    let engine = Arc::new(EloEngine::new(config.rating.clone())?);
    debug!("Rating engine configuration: {}", engine.config());
    let processor = Arc::new(
        GameProcessor::new(engine, config.league.clone()).with_metrics(metrics.clone()),
    );

    let reports = match process_batch(processor, games).await {
        Ok(reports) => reports,
        Err(e) => {
            error!("Failed to rate games: {:#}", e);
            if args.metrics {
                eprint!("{}", metrics.export()?);
            }
            std::process::exit(1);
        }
    };

    write_reports(&reports, args.output.as_deref())?;
    info!("Rated {} games", reports.len());

    if args.metrics {
        eprint!("{}", metrics.export()?);
    }

    Ok(())
}
