//! Metrics for the rating engine
//!
//! The scoring core stays free of shared state; the game processor reports
//! into these collectors when it is given one.

pub mod collector;

pub use collector::{GameMetrics, MetricsCollector, MetricsTimer, PlayerMetrics, RatingMetrics};
