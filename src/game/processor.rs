//! Per-game processing
//!
//! Scores both rosters of a game, rates both teams and assembles the report
//! handed to the league uploader.

use crate::config::LeagueSettings;
use crate::metrics::MetricsCollector;
use crate::rating::{RatingCalculator, RatingInput, RatingResult};
use crate::stats::{apply_elo_delta, PlayerBoxRow, PlayerReport, TeamContext, TeamGameSummary};
use crate::types::{DivisionTier, GameType, TeamId};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Length of a regulation game in seconds
pub const GAME_DURATION_SECONDS: u32 = 780;

/// Every uploaded game links exactly one replay
pub const REPLAYS_PER_GAME: u32 = 1;

/// One row of a team's box score table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Raw table cells, name first
    pub cells: Vec<String>,
    /// Rating the player carries into the game; new players get the default
    #[serde(default)]
    pub prior_rating: Option<f64>,
}

/// One team's side of a box score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamBoxScore {
    pub team_id: TeamId,
    pub score: i64,
    pub players: Vec<PlayerEntry>,
}

/// A finished game as extracted from the league site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    #[serde(default)]
    pub game_type: GameType,
    /// Overrides the league's division for this game
    #[serde(default)]
    pub division: Option<DivisionTier>,
    /// Zero-based position in the season schedule
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
    pub home: TeamBoxScore,
    pub away: TeamBoxScore,
}

/// A scored roster and its aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct TeamOutcome {
    pub team_id: TeamId,
    pub reports: Vec<PlayerReport>,
    pub summary: TeamGameSummary,
}

/// A team's rating before and after the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamRatingSummary {
    pub average: f64,
    pub net: i64,
    pub win_probability: f64,
    pub new_rating: f64,
}

impl From<RatingResult> for TeamRatingSummary {
    fn from(result: RatingResult) -> Self {
        Self {
            average: result.prior_rating,
            net: result.delta,
            win_probability: result.win_probability,
            new_rating: result.new_rating,
        }
    }
}

/// Everything the uploader records for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub season: u32,
    pub division: DivisionTier,
    pub day: u32,
    pub game_type: GameType,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: i64,
    pub away_score: i64,
    /// `None` for a tie
    pub winning_team_id: Option<TeamId>,
    pub home_elo: TeamRatingSummary,
    pub away_elo: TeamRatingSummary,
    pub home_yards: i64,
    pub away_yards: i64,
    #[serde(rename = "scheduled_date")]
    pub played_at: Option<DateTime<Utc>>,
    /// Game clock length in seconds
    pub duration: u32,
    pub is_ot: bool,
    pub num_replays: u32,
    /// Home roster first, then away
    pub players: Vec<PlayerReport>,
}

/// Turns extracted games into rated game reports
#[derive(Debug, Clone)]
pub struct GameProcessor {
    engine: Arc<dyn RatingCalculator>,
    league: LeagueSettings,
    metrics: Option<Arc<MetricsCollector>>,
}

impl GameProcessor {
    pub fn new(engine: Arc<dyn RatingCalculator>, league: LeagueSettings) -> Self {
        Self {
            engine,
            league,
            metrics: None,
        }
    }

    /// Report processed games and scored players into `metrics`
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn league(&self) -> &LeagueSettings {
        &self.league
    }

    /// Score one roster
    ///
    /// Room ids continue from `room_offset` so both rosters of a game share
    /// one sequence.
    pub fn process_team(
        &self,
        team: &TeamBoxScore,
        opponent_score: i64,
        room_offset: u32,
    ) -> crate::error::Result<TeamOutcome> {
        let context = TeamContext {
            team_id: team.team_id.clone(),
            points_for: team.score,
            points_against: opponent_score,
        };

        let mut reports = Vec::with_capacity(team.players.len());
        for (position, entry) in team.players.iter().enumerate() {
            let row = PlayerBoxRow::decode(&entry.cells).with_context(|| {
                format!("Invalid roster row {} for team {}", position + 1, team.team_id)
            })?;

            let prior_rating = entry
                .prior_rating
                .unwrap_or_else(|| self.engine.default_rating());
            let room_id = room_offset + position as u32 + 1;

            let (report, corrections) =
                PlayerReport::build_with_corrections(&row, prior_rating, &context, room_id);

            if let Some(metrics) = &self.metrics {
                metrics.record_player_scored(&corrections);
            }

            debug!(
                player = %report.name,
                role = %report.role,
                receiver_points = report.fantasy_points_receiver,
                qb_points = report.fantasy_points_qb,
                "Scored player"
            );
            reports.push(report);
        }

        let summary = TeamGameSummary::from_reports(
            &reports,
            team.score.saturating_sub(opponent_score),
            self.engine.default_rating(),
        );

        Ok(TeamOutcome {
            team_id: team.team_id.clone(),
            reports,
            summary,
        })
    }

    /// Score and rate one game
    pub fn process_game(&self, game: &GameInput) -> crate::error::Result<GameReport> {
        let Some(metrics) = &self.metrics else {
            return self.rate_game(game);
        };

        let timer = metrics.start_timer();
        let result = self.rate_game(game);

        match &result {
            Ok(report) => {
                metrics.record_game_processed(game.game_type, timer.stop());
                metrics.record_rating_delta(game.game_type, report.home_elo.net);
                metrics.record_rating_delta(game.game_type, report.away_elo.net);
            }
            Err(_) => metrics.record_game_failed(),
        }

        result
    }

    fn rate_game(&self, game: &GameInput) -> crate::error::Result<GameReport> {
        let division = game.division.unwrap_or(self.league.division);

        let mut home = self.process_team(&game.home, game.away.score, 0)?;
        let mut away = self.process_team(&game.away, game.home.score, home.reports.len() as u32)?;

        let home_result = self.engine.compute_rating_update(&RatingInput {
            division,
            game_type: game.game_type,
            team_a_rating: home.summary.average_rating,
            team_b_rating: away.summary.average_rating,
            team_a_margin_of_victory: home.summary.margin_of_victory,
        });
        let away_result = self.engine.compute_rating_update(&RatingInput {
            division,
            game_type: game.game_type,
            team_a_rating: away.summary.average_rating,
            team_b_rating: home.summary.average_rating,
            team_a_margin_of_victory: away.summary.margin_of_victory,
        });

        apply_elo_delta(&mut home.reports, home_result.delta);
        apply_elo_delta(&mut away.reports, away_result.delta);

        let winning_team_id = match game.home.score.cmp(&game.away.score) {
            std::cmp::Ordering::Greater => Some(home.team_id.clone()),
            std::cmp::Ordering::Less => Some(away.team_id.clone()),
            std::cmp::Ordering::Equal => None,
        };

        info!(
            home = %home.team_id,
            away = %away.team_id,
            home_score = game.home.score,
            away_score = game.away.score,
            home_delta = home_result.delta,
            away_delta = away_result.delta,
            "Processed game"
        );

        let mut players = home.reports;
        players.extend(away.reports);

        Ok(GameReport {
            season: self.league.season,
            division,
            day: self.league.day_for_index(game.index.unwrap_or(0)),
            game_type: game.game_type,
            home_team_id: home.team_id,
            away_team_id: away.team_id,
            home_score: game.home.score,
            away_score: game.away.score,
            winning_team_id,
            home_elo: home_result.into(),
            away_elo: away_result.into(),
            home_yards: home.summary.total_yards,
            away_yards: away.summary.total_yards,
            played_at: game.played_at,
            duration: GAME_DURATION_SECONDS,
            is_ot: false,
            num_replays: REPLAYS_PER_GAME,
            players,
        })
    }
}
