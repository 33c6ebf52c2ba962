//! Per-player game reports and team rollups

use crate::stats::box_row::PlayerBoxRow;
use crate::stats::fantasy::{compute_fantasy_points, PASSER_SCORING, RECEIVER_SCORING};
use crate::stats::normalize::{normalize_row_with_corrections, StatCorrection};
use crate::stats::player::PlayerStats;
use crate::stats::role::infer_role;
use crate::types::{Role, TeamId};
use serde::{Deserialize, Serialize};

/// Rating used for a team that fielded no players
pub const DEFAULT_TEAM_RATING: f64 = 1500.0;

/// Minutes credited to every player; real playing time is not recorded
pub const MINUTES_PLAYED: u32 = 26;

/// Defensive position is never observable from box scores
pub const UNKNOWN_DEFENSIVE_ROLE: &str = "NA";

/// The team a player appeared for and how the game ended for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamContext {
    pub team_id: TeamId,
    pub points_for: i64,
    pub points_against: i64,
}

/// Everything recorded about one player in one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub name: String,
    pub team_id: TeamId,
    /// One-based position of the player across both rosters
    pub room_id: u32,
    /// Rating the player carried into the game
    pub prior_rating: f64,
    #[serde(rename = "w")]
    pub wins: u8,
    #[serde(rename = "l")]
    pub losses: u8,
    #[serde(rename = "minp")]
    pub minutes_played: u32,
    #[serde(rename = "ptsf")]
    pub points_for: i64,
    #[serde(rename = "ptsa")]
    pub points_against: i64,
    #[serde(rename = "rec_fpts")]
    pub fantasy_points_receiver: f64,
    #[serde(rename = "qb_fpts")]
    pub fantasy_points_qb: f64,
    #[serde(rename = "poso")]
    pub role: Role,
    #[serde(rename = "posd")]
    pub defensive_role: String,
    /// Team rating movement, set once the game has been rated
    pub elo_change: Option<i64>,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl PlayerReport {
    /// Score one row in its team context
    pub fn build(
        row: &PlayerBoxRow,
        prior_rating: f64,
        context: &TeamContext,
        room_id: u32,
    ) -> Self {
        Self::build_with_corrections(row, prior_rating, context, room_id).0
    }

    /// Score one row, also returning the repairs normalization applied
    pub fn build_with_corrections(
        row: &PlayerBoxRow,
        prior_rating: f64,
        context: &TeamContext,
        room_id: u32,
    ) -> (Self, Vec<StatCorrection>) {
        let (stats, corrections) = normalize_row_with_corrections(row);

        // A tie is booked as a loss
        let wins = u8::from(context.points_for > context.points_against);

        let report = Self {
            name: row.name().to_string(),
            team_id: context.team_id.clone(),
            room_id,
            prior_rating,
            wins,
            losses: 1 - wins,
            minutes_played: MINUTES_PLAYED,
            points_for: context.points_for,
            points_against: context.points_against,
            fantasy_points_receiver: compute_fantasy_points(&stats, &RECEIVER_SCORING),
            fantasy_points_qb: compute_fantasy_points(&stats, &PASSER_SCORING),
            role: infer_role(&stats),
            defensive_role: UNKNOWN_DEFENSIVE_ROLE.to_string(),
            elo_change: None,
            stats,
        };

        (report, corrections)
    }

    pub fn passer_rating(&self) -> Option<f64> {
        self.stats.passing.qb_rating
    }
}

/// Rounded mean of the players' incoming ratings, 1500 for an empty roster
pub fn team_average_rating(reports: &[PlayerReport]) -> f64 {
    team_average_rating_or(reports, DEFAULT_TEAM_RATING)
}

/// Rounded mean of the players' incoming ratings, `default` for an empty roster
pub fn team_average_rating_or(reports: &[PlayerReport], default: f64) -> f64 {
    if reports.is_empty() {
        return default;
    }

    let total: f64 = reports.iter().map(|report| report.prior_rating).sum();
    (total / reports.len() as f64).round()
}

/// Receptions plus rushing yards plus passing yards over the roster
///
/// Receptions are a count, not yardage. The league's records have always
/// been computed this way, so the figure is kept as is.
pub fn team_total_yards(reports: &[PlayerReport]) -> i64 {
    reports
        .iter()
        .map(|report| {
            report
                .stats
                .receiving
                .receptions
                .saturating_add(report.stats.receiving.rushing_yards)
                .saturating_add(report.stats.passing.passing_yards)
        })
        .fold(0, i64::saturating_add)
}

/// Credit the team's rating movement to every player on it
pub fn apply_elo_delta(reports: &mut [PlayerReport], delta: i64) {
    for report in reports.iter_mut() {
        report.elo_change = Some(delta);
    }
}

/// Team-level aggregates feeding the rating update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamGameSummary {
    pub average_rating: f64,
    pub total_yards: i64,
    pub margin_of_victory: i64,
}

impl TeamGameSummary {
    pub fn from_reports(reports: &[PlayerReport], margin_of_victory: i64, default_rating: f64) -> Self {
        Self {
            average_rating: team_average_rating_or(reports, default_rating),
            total_yards: team_total_yards(reports),
            margin_of_victory,
        }
    }
}
