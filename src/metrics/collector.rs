//! Metrics collection using Prometheus
//!
//! This module tracks processed games, scored players, stat repairs and
//! rating movement for a rating run.

use crate::stats::StatCorrection;
use crate::types::GameType;
use anyhow::Result;
use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the rating engine
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Game-level metrics
    game_metrics: GameMetrics,

    /// Player-level metrics
    player_metrics: PlayerMetrics,

    /// Rating metrics
    rating_metrics: RatingMetrics,
}

/// Game-level metrics
#[derive(Clone)]
pub struct GameMetrics {
    /// Games processed by game type
    pub games_processed_total: IntCounterVec,

    /// Games that could not be processed
    pub games_failed_total: IntCounter,

    /// Time spent processing a single game
    pub game_processing_duration: Histogram,
}

/// Player-level metrics
#[derive(Clone)]
pub struct PlayerMetrics {
    /// Player rows scored
    pub players_scored_total: IntCounter,

    /// Data-entry repairs applied during normalization
    pub stat_corrections_total: IntCounterVec,
}

/// Rating metrics
#[derive(Clone)]
pub struct RatingMetrics {
    /// Distribution of team rating deltas
    pub rating_delta: HistogramVec,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let game_metrics = GameMetrics::new(&registry)?;
        let player_metrics = PlayerMetrics::new(&registry)?;
        let rating_metrics = RatingMetrics::new(&registry)?;

        Ok(Self {
            registry,
            game_metrics,
            player_metrics,
            rating_metrics,
        })
    }

    pub fn game(&self) -> &GameMetrics {
        &self.game_metrics
    }

    pub fn player(&self) -> &PlayerMetrics {
        &self.player_metrics
    }

    /// Record a game that was rated successfully
    pub fn record_game_processed(&self, game_type: GameType, duration: Duration) {
        self.game_metrics
            .games_processed_total
            .with_label_values(&[game_type.as_str()])
            .inc();

        self.game_metrics
            .game_processing_duration
            .observe(duration.as_secs_f64());
    }

    /// Record a game that failed to process
    pub fn record_game_failed(&self) {
        self.game_metrics.games_failed_total.inc();
    }

    /// Record a scored player and the repairs made to their row
    pub fn record_player_scored(&self, corrections: &[StatCorrection]) {
        self.player_metrics.players_scored_total.inc();

        for correction in corrections {
            self.player_metrics
                .stat_corrections_total
                .with_label_values(&[correction.kind()])
                .inc();
        }
    }

    /// Record a team's rating movement
    pub fn record_rating_delta(&self, game_type: GameType, delta: i64) {
        self.rating_metrics
            .rating_delta
            .with_label_values(&[game_type.as_str()])
            .observe(delta as f64);
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn export(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

impl std::fmt::Debug for MetricsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsCollector").finish_non_exhaustive()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl GameMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let games_processed_total = IntCounterVec::new(
            Opts::new(
                "league_ratings_games_processed_total",
                "Total games processed",
            ),
            &["game_type"],
        )?;
        registry.register(Box::new(games_processed_total.clone()))?;

        let games_failed_total = IntCounter::new(
            "league_ratings_games_failed_total",
            "Total games that failed to process",
        )?;
        registry.register(Box::new(games_failed_total.clone()))?;

        let game_processing_duration = Histogram::with_opts(
            HistogramOpts::new(
                "league_ratings_game_processing_duration_seconds",
                "Game processing time",
            )
            .buckets(vec![0.00001, 0.0001, 0.001, 0.005, 0.01, 0.05, 0.1]),
        )?;
        registry.register(Box::new(game_processing_duration.clone()))?;

        Ok(Self {
            games_processed_total,
            games_failed_total,
            game_processing_duration,
        })
    }
}

impl PlayerMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let players_scored_total = IntCounter::new(
            "league_ratings_players_scored_total",
            "Total player rows scored",
        )?;
        registry.register(Box::new(players_scored_total.clone()))?;

        let stat_corrections_total = IntCounterVec::new(
            Opts::new(
                "league_ratings_stat_corrections_total",
                "Box score repairs applied during normalization",
            ),
            &["kind"],
        )?;
        registry.register(Box::new(stat_corrections_total.clone()))?;

        Ok(Self {
            players_scored_total,
            stat_corrections_total,
        })
    }
}

impl RatingMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let rating_delta = HistogramVec::new(
            HistogramOpts::new("league_ratings_rating_delta", "Team rating delta per game")
                .buckets(vec![
                    -100.0, -50.0, -25.0, -10.0, 0.0, 10.0, 25.0, 50.0, 100.0,
                ]),
            &["game_type"],
        )?;
        registry.register(Box::new(rating_delta.clone()))?;

        Ok(Self { rating_delta })
    }
}
