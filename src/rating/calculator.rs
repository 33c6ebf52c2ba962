//! Rating calculator trait and the values it exchanges
//!
//! This module defines the interface the game processor uses to turn team
//! ratings and a result into a rating update, plus a mock implementation.

use crate::types::{DivisionTier, GameType};
use serde::{Deserialize, Serialize};

/// One team's view of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingInput {
    pub division: DivisionTier,
    pub game_type: GameType,
    /// Rating of the team being updated
    pub team_a_rating: f64,
    /// Rating of its opponent
    pub team_b_rating: f64,
    /// Points for minus points against, from team A's side
    pub team_a_margin_of_victory: i64,
}

impl RatingInput {
    /// The same game seen from the opponent's side
    pub fn reversed(&self) -> Self {
        Self {
            division: self.division,
            game_type: self.game_type,
            team_a_rating: self.team_b_rating,
            team_b_rating: self.team_a_rating,
            team_a_margin_of_victory: self.team_a_margin_of_victory.saturating_neg(),
        }
    }
}

/// Result of a rating calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    /// Probability that team A was expected to win (0.0 to 1.0)
    pub win_probability: f64,
    /// Signed, rounded rating movement
    pub delta: i64,
    pub prior_rating: f64,
    pub new_rating: f64,
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync + std::fmt::Debug {
    /// Compute team A's rating update for one finished game
    fn compute_rating_update(&self, input: &RatingInput) -> RatingResult;

    /// Rating used for a team with no rated players
    fn default_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}

/// Mock rating calculator for testing
///
/// Returns a fixed delta and records every input it receives.
#[derive(Debug, Default)]
pub struct MockRatingCalculator {
    calculation_calls: std::sync::Mutex<Vec<RatingInput>>,
    fixed_delta: i64,
}

impl MockRatingCalculator {
    pub fn new(fixed_delta: i64) -> Self {
        Self {
            calculation_calls: std::sync::Mutex::new(Vec::new()),
            fixed_delta,
        }
    }

    /// Get all calculation calls made (for testing)
    pub fn get_calculation_calls(&self) -> Vec<RatingInput> {
        self.calculation_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for MockRatingCalculator {
    fn compute_rating_update(&self, input: &RatingInput) -> RatingResult {
        if let Ok(mut calls) = self.calculation_calls.lock() {
            calls.push(*input);
        }

        // Winners gain, losers give the same amount back
        let delta = self.fixed_delta * input.team_a_margin_of_victory.signum();

        RatingResult {
            win_probability: 0.5,
            delta,
            prior_rating: input.team_a_rating,
            new_rating: input.team_a_rating + delta as f64,
        }
    }

    fn default_rating(&self) -> f64 {
        1500.0
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "mock",
            "fixed_delta": self.fixed_delta
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> RatingInput {
        RatingInput {
            division: DivisionTier::Two,
            game_type: GameType::Playoff,
            team_a_rating: 1520.0,
            team_b_rating: 1480.0,
            team_a_margin_of_victory: 6,
        }
    }

    #[test]
    fn test_reversed_input_swaps_perspective() {
        let input = sample_input();
        let reversed = input.reversed();

        assert_eq!(reversed.team_a_rating, 1480.0);
        assert_eq!(reversed.team_b_rating, 1520.0);
        assert_eq!(reversed.team_a_margin_of_victory, -6);
        assert_eq!(reversed.division, DivisionTier::Two);
        assert_eq!(reversed.game_type, GameType::Playoff);
        assert_eq!(reversed.reversed(), input);
    }

    #[test]
    fn test_mock_calculator() {
        let calculator = MockRatingCalculator::new(20);

        let win = calculator.compute_rating_update(&sample_input());
        assert_eq!(win.delta, 20);
        assert_eq!(win.new_rating, 1540.0);

        let loss = calculator.compute_rating_update(&sample_input().reversed());
        assert_eq!(loss.delta, -20);
        assert_eq!(loss.prior_rating, 1480.0);

        let calls = calculator.get_calculation_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].team_a_margin_of_victory, -6);
        assert_eq!(calculator.config()["type"], "mock");
    }

    #[test]
    fn test_reversed_extreme_margin_saturates() {
        let mut input = sample_input();
        input.team_a_margin_of_victory = i64::MIN;

        assert_eq!(input.reversed().team_a_margin_of_victory, i64::MAX);
    }
}
