//! Team rating updates using an Elo model with a dynamic K-factor
//!
//! This module provides the rating calculator interface and the Elo engine
//! built on the skillratings crate's win-probability model.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::{MockRatingCalculator, RatingCalculator, RatingInput, RatingResult};
pub use elo::{outcome_score, win_probability, EloEngine, KFactorBreakdown};
