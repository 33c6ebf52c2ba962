//! Passer efficiency rating
//!
//! The NFL passer rating formula with interceptions weighted more heavily,
//! since they are rarer in this league than in the NFL.

use crate::stats::player::PlayerStats;
use crate::utils::round_to;

/// Fewest attempts that produce a rating
pub const MIN_PASS_ATTEMPTS: i64 = 5;

const COMPONENT_MAX: f64 = 2.375;

/// Passer rating rounded to one decimal, `None` below [`MIN_PASS_ATTEMPTS`]
pub fn compute_passer_rating(stats: &PlayerStats) -> Option<f64> {
    let passing = &stats.passing;
    if passing.attempts < MIN_PASS_ATTEMPTS {
        return None;
    }

    let attempts = passing.attempts as f64;

    let completion = component((passing.completions as f64 / attempts - 0.3) * 5.0, 0.0);
    let yards = component((passing.passing_yards as f64 / attempts - 3.0) * 0.25, 0.0);
    let touchdowns = component(passing.passing_touchdowns as f64 / attempts * 20.0, 0.0);
    let interceptions = component(
        COMPONENT_MAX - passing.interceptions_thrown as f64 / attempts * 25.0,
        -1.0,
    );

    Some(round_to(
        (completion + yards + touchdowns + interceptions) / 6.0 * 100.0,
        1,
    ))
}

/// Bound one rating component to `[floor, COMPONENT_MAX]`
fn component(value: f64, floor: f64) -> f64 {
    value.clamp(floor, COMPONENT_MAX)
}
