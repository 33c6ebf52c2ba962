//! Common types used throughout the rating and scoring engine

use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

/// Identifier of a team as assigned by the league database
pub type TeamId = String;

/// Division a game is played in
///
/// Serialized as the bare tier number (`1` or `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DivisionTier {
    One,
    Two,
}

impl TryFrom<u8> for DivisionTier {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DivisionTier::One),
            2 => Ok(DivisionTier::Two),
            _ => Err(ScoringError::InvalidDivision { value }),
        }
    }
}

impl From<DivisionTier> for u8 {
    fn from(tier: DivisionTier) -> Self {
        match tier {
            DivisionTier::One => 1,
            DivisionTier::Two => 2,
        }
    }
}

impl std::fmt::Display for DivisionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", u8::from(*self))
    }
}

/// Stage of the season a game belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    #[default]
    Season,
    Playoff,
    Final,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Season => "SEASON",
            GameType::Playoff => "PLAYOFF",
            GameType::Final => "FINAL",
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Offensive role inferred from a player's stat line
///
/// Every non-passer skill position collapses to `WR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "WR")]
    Receiver,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Quarterback => write!(f, "QB"),
            Role::Receiver => write!(f, "WR"),
        }
    }
}
