//! League configuration

use crate::types::DivisionTier;
use serde::{Deserialize, Serialize};

/// Season-level settings shared by every game in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    /// Season number games are recorded under
    pub season: u32,
    /// Division games are played in unless a game overrides it
    pub division: DivisionTier,
    /// Number of teams in the division, used to derive the schedule day
    pub teams: u32,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            season: 1,
            division: DivisionTier::One,
            teams: 8,
        }
    }
}

impl LeagueSettings {
    /// Games played on each schedule day (every team plays once)
    pub fn games_per_day(&self) -> u32 {
        (self.teams / 2).max(1)
    }

    /// One-based schedule day of the game at zero-based `index`
    pub fn day_for_index(&self, index: usize) -> u32 {
        index as u32 / self.games_per_day() + 1
    }
}
