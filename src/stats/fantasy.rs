//! Fantasy point scoring

use crate::stats::player::{PlayerStats, StatKey};
use crate::utils::round_to;
use tracing::trace;

/// Sparse point weights per stat; stats not listed score nothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringTable {
    pub name: &'static str,
    pub weights: &'static [(StatKey, f64)],
}

impl ScoringTable {
    pub fn weight(&self, key: StatKey) -> Option<f64> {
        self.weights
            .iter()
            .find(|(stat, _)| *stat == key)
            .map(|(_, weight)| *weight)
    }
}

/// Receiving and rushing profile
pub const RECEIVER_SCORING: ScoringTable = ScoringTable {
    name: "receiver",
    weights: &[
        (StatKey::RushingYards, 0.2),
        (StatKey::RushingTouchdowns, 8.0),
        (StatKey::Receptions, 1.0),
        (StatKey::ReceivingYards, 0.1),
        (StatKey::ReceivingTouchdowns, 6.0),
    ],
};

/// Passing profile
pub const PASSER_SCORING: ScoringTable = ScoringTable {
    name: "passer",
    weights: &[
        (StatKey::PassingYards, 0.05),
        (StatKey::PassingTouchdowns, 4.0),
        (StatKey::InterceptionsThrown, -3.0),
    ],
};

/// Score a stat line against `table`, rounded to one decimal
///
/// Stats without a value (an unrated passer) contribute nothing.
pub fn compute_fantasy_points(stats: &PlayerStats, table: &ScoringTable) -> f64 {
    let total = table
        .weights
        .iter()
        .filter_map(|(key, weight)| stats.value(*key).map(|value| value * weight))
        .fold(0.0, |acc, points| acc + points);

    let points = round_to(total, 1);
    trace!(table = table.name, points, "Scored fantasy points");
    points
}
