//! League Ratings - team Elo ratings and player scoring from box scores
//!
//! This crate turns per-game box scores of a recreational football league
//! into team rating updates, passer ratings and fantasy points, and
//! assembles the per-game report the league's uploader persists.

pub mod config;
pub mod error;
pub mod game;
pub mod metrics;
pub mod rating;
pub mod stats;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, ScoringError};
pub use types::*;

// Re-export key components
pub use game::{process_batch, GameProcessor};
pub use rating::{EloEngine, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
