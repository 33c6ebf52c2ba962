//! Elo rating configuration

use crate::error::ScoringError;
use crate::types::{DivisionTier, GameType};
use serde::{Deserialize, Serialize};

/// Parameters of the dynamic K-factor Elo model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Base K-factor applied to every update
    pub k_factor: f64,
    /// Rating assumed for a team that fielded no rated players
    pub default_rating: f64,
    /// K-multiplier term for division 1 games
    pub division_one_term: f64,
    /// K-multiplier term for division 2 games
    pub division_two_term: f64,
    /// K-multiplier term for regular season games
    pub season_term: f64,
    /// K-multiplier term for playoff games
    pub playoff_term: f64,
    /// K-multiplier term for finals
    pub final_term: f64,
    /// Numerator and offset of the competitive-balance correction
    pub balance_constant: f64,
    /// Weight of the rating gap in the competitive-balance correction
    pub balance_scale: f64,
    /// Smallest denominator allowed in the competitive-balance correction
    pub balance_epsilon: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            default_rating: 1500.0,
            division_one_term: 0.3,
            division_two_term: 0.0,
            season_term: 0.3,
            playoff_term: 0.6,
            final_term: 1.1,
            balance_constant: 2.2,
            balance_scale: 0.001,
            balance_epsilon: 1e-6,
        }
    }
}

impl RatingConfig {
    /// K-multiplier term contributed by the division
    pub fn division_term(&self, division: DivisionTier) -> f64 {
        match division {
            DivisionTier::One => self.division_one_term,
            DivisionTier::Two => self.division_two_term,
        }
    }

    /// K-multiplier term contributed by the stakes of the game
    pub fn game_type_term(&self, game_type: GameType) -> f64 {
        match game_type {
            GameType::Season => self.season_term,
            GameType::Playoff => self.playoff_term,
            GameType::Final => self.final_term,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(self.k_factor.is_finite() && self.k_factor > 0.0) {
            return Err(ScoringError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        if !self.default_rating.is_finite() {
            return Err(ScoringError::ConfigurationError {
                message: "Default rating must be finite".to_string(),
            }
            .into());
        }

        let terms = [
            self.division_one_term,
            self.division_two_term,
            self.season_term,
            self.playoff_term,
            self.final_term,
        ];
        if terms.iter().any(|term| !term.is_finite()) {
            return Err(ScoringError::ConfigurationError {
                message: "Division and game type terms must be finite".to_string(),
            }
            .into());
        }

        if !(self.balance_constant.is_finite() && self.balance_constant > 0.0) {
            return Err(ScoringError::ConfigurationError {
                message: "Balance constant must be positive".to_string(),
            }
            .into());
        }

        if !(self.balance_scale.is_finite() && self.balance_scale >= 0.0) {
            return Err(ScoringError::ConfigurationError {
                message: "Balance scale must be non-negative".to_string(),
            }
            .into());
        }

        if !(self.balance_epsilon.is_finite() && self.balance_epsilon > 0.0) {
            return Err(ScoringError::ConfigurationError {
                message: "Balance epsilon must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
