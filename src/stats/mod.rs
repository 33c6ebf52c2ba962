//! Player performance scoring
//!
//! This module turns raw box score rows into normalized stat lines, passer
//! ratings and fantasy points, and rolls players up into team aggregates.

pub mod box_row;
pub mod fantasy;
pub mod normalize;
pub mod passer;
pub mod player;
pub mod report;
pub mod role;

// Re-export commonly used types
pub use box_row::{BoxColumn, PlayerBoxRow};
pub use fantasy::{compute_fantasy_points, ScoringTable, PASSER_SCORING, RECEIVER_SCORING};
pub use normalize::{apply_corrections, normalize_row, normalize_row_with_corrections, StatCorrection};
pub use passer::compute_passer_rating;
pub use player::{PlayerStats, StatKey};
pub use report::{
    apply_elo_delta, team_average_rating, team_average_rating_or, team_total_yards, PlayerReport,
    TeamContext, TeamGameSummary,
};
pub use role::infer_role;
