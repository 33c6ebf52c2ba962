//! Role inference from a stat line

use crate::stats::player::PlayerStats;
use crate::types::Role;

/// Attempts a player must exceed to be considered the passer
pub const QB_ATTEMPT_THRESHOLD: i64 = 8;

/// QB when the player threw more than [`QB_ATTEMPT_THRESHOLD`] passes and
/// more passes than catches, otherwise WR
pub fn infer_role(stats: &PlayerStats) -> Role {
    let attempts = stats.passing.total_attempts();

    if attempts > QB_ATTEMPT_THRESHOLD && attempts > stats.receiving.receptions {
        Role::Quarterback
    } else {
        Role::Receiver
    }
}
