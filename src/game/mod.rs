//! Game assembly around the rating and scoring core
//!
//! This module scores both rosters of a game, rates both teams and builds the
//! report the league uploader persists.

pub mod batch;
pub mod processor;

// Re-export commonly used types
pub use batch::process_batch;
pub use processor::{
    GameInput, GameProcessor, GameReport, PlayerEntry, TeamBoxScore, TeamOutcome,
    TeamRatingSummary,
};
