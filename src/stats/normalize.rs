//! Box score normalization
//!
//! Maps a decoded row onto the full stat record, repairs known data-entry
//! mistakes and fills in the derived fields.

use crate::stats::box_row::{BoxColumn, PlayerBoxRow};
use crate::stats::passer::compute_passer_rating;
use crate::stats::player::{DefensiveStats, PassingStats, PlayerStats, ReceivingStats, SnapCounts};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A data-entry mistake that was repaired during normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCorrection {
    /// Receiving yards without a reception
    MissingReception,
    /// Rushing yards without a rush attempt
    MissingRushAttempt,
    /// Passing yards without a pass attempt
    MissingPassAttempt,
}

impl StatCorrection {
    /// Label used in logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            StatCorrection::MissingReception => "missing_reception",
            StatCorrection::MissingRushAttempt => "missing_rush_attempt",
            StatCorrection::MissingPassAttempt => "missing_pass_attempt",
        }
    }
}

impl std::fmt::Display for StatCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Normalize a row into a full stat record
pub fn normalize_row(row: &PlayerBoxRow) -> PlayerStats {
    normalize_row_with_corrections(row).0
}

/// Normalize a row, also returning the repairs that were applied
pub fn normalize_row_with_corrections(row: &PlayerBoxRow) -> (PlayerStats, Vec<StatCorrection>) {
    let mut stats = PlayerStats {
        receiving: ReceivingStats {
            receptions: row.get(BoxColumn::Receptions),
            receiving_yards: row.get(BoxColumn::ReceivingYards),
            rush_attempts: row.get(BoxColumn::RushAttempts),
            rushing_yards: row.get(BoxColumn::RushingYards),
            receiving_touchdowns: row.get(BoxColumn::Touchdowns),
            ..Default::default()
        },
        passing: PassingStats {
            attempts: row.get(BoxColumn::PassAttempts),
            completions: row.get(BoxColumn::Completions),
            passing_yards: row.get(BoxColumn::PassingYards),
            passing_touchdowns: row.get(BoxColumn::PassingTouchdowns),
            interceptions_thrown: row.get(BoxColumn::InterceptionsThrown),
            ..Default::default()
        },
        defense: DefensiveStats {
            pass_deflections: row.get(BoxColumn::PassDeflections),
            tackles: row.get(BoxColumn::Tackles),
            interceptions: row.get(BoxColumn::InterceptionsCaught),
            ..Default::default()
        },
        ..Default::default()
    };

    let corrections = apply_corrections(row.name(), &mut stats);

    // Anyone with a pass attempt was at QB for that snap
    stats.snaps = SnapCounts {
        quarterback: stats.passing.total_attempts(),
        ..Default::default()
    };
    stats.passing.qb_rating = compute_passer_rating(&stats);

    (stats, corrections)
}

/// Repair yardage recorded without the matching attempt or catch
///
/// Already consistent stats are left untouched, so repeated calls are no-ops.
pub fn apply_corrections(player: &str, stats: &mut PlayerStats) -> Vec<StatCorrection> {
    let mut corrections = Vec::new();

    if stats.receiving.receiving_yards > 0 && stats.receiving.receptions == 0 {
        warn!(
            player,
            receiving_yards = stats.receiving.receiving_yards,
            "Receiving yards recorded without a reception, setting receptions to 1"
        );
        stats.receiving.receptions = 1;
        corrections.push(StatCorrection::MissingReception);
    }

    if stats.receiving.rushing_yards > 0 && stats.receiving.rush_attempts == 0 {
        warn!(
            player,
            rushing_yards = stats.receiving.rushing_yards,
            "Rushing yards recorded without a rush attempt, setting attempts to 1"
        );
        stats.receiving.rush_attempts = 1;
        corrections.push(StatCorrection::MissingRushAttempt);
    }

    if stats.passing.passing_yards > 0 && stats.passing.attempts == 0 {
        warn!(
            player,
            passing_yards = stats.passing.passing_yards,
            "Passing yards recorded without a pass attempt, setting attempts to 1"
        );
        stats.passing.attempts = 1;
        corrections.push(StatCorrection::MissingPassAttempt);
    }

    corrections
}
