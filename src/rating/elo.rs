//! Elo rating engine with a dynamic K-factor
//!
//! Win probabilities come from the logistic Elo model provided by the
//! skillratings crate. The K-factor is scaled by four additive terms: the
//! division, the stakes of the game, a competitive-balance correction and
//! the margin of victory.

use crate::config::RatingConfig;
use crate::rating::calculator::{RatingCalculator, RatingInput, RatingResult};
use serde::{Deserialize, Serialize};
use skillratings::elo::{expected_score, EloRating};
use tracing::debug;

/// Probability that a team rated `rating` beats one rated `opponent`
pub fn win_probability(rating: f64, opponent: f64) -> f64 {
    let (expected, _) = expected_score(
        &EloRating { rating },
        &EloRating { rating: opponent },
    );
    expected
}

/// Score credited for a result: 1 for a win, 0 for a loss, 0.5 for a tie
pub fn outcome_score(margin_of_victory: i64) -> f64 {
    match margin_of_victory.signum() {
        1 => 1.0,
        -1 => 0.0,
        _ => 0.5,
    }
}

/// The additive terms of the K-factor multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFactorBreakdown {
    pub division: f64,
    pub game_importance: f64,
    /// Dampens swings between teams far apart in rating
    pub competitive_balance: f64,
    pub margin_of_victory: f64,
}

impl KFactorBreakdown {
    pub fn total(&self) -> f64 {
        self.division + self.game_importance + self.competitive_balance + self.margin_of_victory
    }
}

/// Elo rating engine
#[derive(Debug, Clone, Default)]
pub struct EloEngine {
    config: RatingConfig,
}

impl EloEngine {
    /// Create a new engine, rejecting invalid parameters
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn rating_config(&self) -> &RatingConfig {
        &self.config
    }

    /// Break the K-factor multiplier for `input` into its terms
    pub fn k_factor_breakdown(&self, input: &RatingInput) -> KFactorBreakdown {
        let margin = input.team_a_margin_of_victory;

        // A tie counts team B as the winner; only the gap size matters below
        let (winner, loser) = if margin > 0 {
            (input.team_a_rating, input.team_b_rating)
        } else {
            (input.team_b_rating, input.team_a_rating)
        };

        let denominator = ((winner - loser).abs() * self.config.balance_scale
            + self.config.balance_constant)
            .max(self.config.balance_epsilon);

        KFactorBreakdown {
            division: self.config.division_term(input.division),
            game_importance: self.config.game_type_term(input.game_type),
            competitive_balance: self.config.balance_constant / denominator,
            margin_of_victory: (margin.unsigned_abs() as f64 + 1.0).ln(),
        }
    }

    /// Compute team A's rating update for one finished game
    pub fn compute_rating_update(&self, input: &RatingInput) -> RatingResult {
        let win_probability = win_probability(input.team_a_rating, input.team_b_rating);
        let outcome = outcome_score(input.team_a_margin_of_victory);
        let breakdown = self.k_factor_breakdown(input);

        let delta =
            (self.config.k_factor * breakdown.total() * (outcome - win_probability)).round() as i64;

        debug!(
            rating = input.team_a_rating,
            opponent = input.team_b_rating,
            margin = input.team_a_margin_of_victory,
            win_probability,
            multiplier = breakdown.total(),
            delta,
            "Computed rating update"
        );

        RatingResult {
            win_probability,
            delta,
            prior_rating: input.team_a_rating,
            new_rating: input.team_a_rating + delta as f64,
        }
    }
}

impl RatingCalculator for EloEngine {
    fn compute_rating_update(&self, input: &RatingInput) -> RatingResult {
        EloEngine::compute_rating_update(self, input)
    }

    fn default_rating(&self) -> f64 {
        self.config.default_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DivisionTier, GameType};
    use proptest::prelude::*;

    fn input(a: f64, b: f64, margin: i64, division: DivisionTier, game_type: GameType) -> RatingInput {
        RatingInput {
            division,
            game_type,
            team_a_rating: a,
            team_b_rating: b,
            team_a_margin_of_victory: margin,
        }
    }

    #[test]
    fn test_equal_ratings_are_even() {
        assert_eq!(win_probability(1500.0, 1500.0), 0.5);
        assert_eq!(win_probability(-20.0, -20.0), 0.5);
    }

    #[test]
    fn test_higher_rating_is_favoured() {
        let p = win_probability(1600.0, 1400.0);
        assert!((p - 0.759_746_926_6).abs() < 1e-9);
        assert!(win_probability(1400.0, 1600.0) < 0.5);
    }

    #[test]
    fn test_outcome_score() {
        assert_eq!(outcome_score(7), 1.0);
        assert_eq!(outcome_score(-1), 0.0);
        assert_eq!(outcome_score(0), 0.5);
    }

    #[test]
    fn test_season_win_between_equals() {
        let engine = EloEngine::default();
        let game = input(1500.0, 1500.0, 7, DivisionTier::Two, GameType::Season);

        let breakdown = engine.k_factor_breakdown(&game);
        assert_eq!(breakdown.division, 0.0);
        assert_eq!(breakdown.game_importance, 0.3);
        assert_eq!(breakdown.competitive_balance, 1.0);
        assert!((breakdown.margin_of_victory - 8f64.ln()).abs() < 1e-12);
        assert!((breakdown.total() - 3.379_441_5).abs() < 1e-6);

        let result = engine.compute_rating_update(&game);
        assert_eq!(result.win_probability, 0.5);
        assert_eq!(result.delta, 54);
        assert_eq!(result.prior_rating, 1500.0);
        assert_eq!(result.new_rating, 1554.0);
    }

    #[test]
    fn test_both_sides_of_a_game() {
        let engine = EloEngine::default();
        let home = input(1500.0, 1500.0, 7, DivisionTier::Two, GameType::Season);

        assert_eq!(engine.compute_rating_update(&home).delta, 54);
        assert_eq!(engine.compute_rating_update(&home.reversed()).delta, -54);
    }

    #[test]
    fn test_final_in_top_division() {
        let engine = EloEngine::default();
        let game = input(1500.0, 1500.0, 3, DivisionTier::One, GameType::Final);
        assert_eq!(engine.compute_rating_update(&game).delta, 61);
    }

    #[test]
    fn test_favourite_win_moves_less_than_upset() {
        let engine = EloEngine::default();

        let favourite = input(1600.0, 1400.0, 10, DivisionTier::Two, GameType::Season);
        let result = engine.compute_rating_update(&favourite);
        assert_eq!(result.delta, 28);
        assert_eq!(result.new_rating, 1628.0);
        assert_eq!(engine.compute_rating_update(&favourite.reversed()).delta, -28);

        let upset = input(1400.0, 1600.0, 14, DivisionTier::One, GameType::Playoff);
        assert_eq!(engine.compute_rating_update(&upset).delta, 110);
        assert_eq!(engine.compute_rating_update(&upset.reversed()).delta, -110);
    }

    #[test]
    fn test_tie_between_equals_is_neutral() {
        let engine = EloEngine::default();
        let game = input(1500.0, 1500.0, 0, DivisionTier::One, GameType::Season);

        let breakdown = engine.k_factor_breakdown(&game);
        assert_eq!(breakdown.margin_of_victory, 0.0);
        assert_eq!(engine.compute_rating_update(&game).delta, 0);
    }

    #[test]
    fn test_tie_against_weaker_team_costs_rating() {
        let engine = EloEngine::default();
        let game = input(1600.0, 1400.0, 0, DivisionTier::Two, GameType::Season);
        assert_eq!(engine.compute_rating_update(&game).delta, -10);
    }

    #[test]
    fn test_competitive_balance_decays_with_gap() {
        let engine = EloEngine::default();
        let close = engine.k_factor_breakdown(&input(1510.0, 1490.0, 3, DivisionTier::One, GameType::Season));
        let wide = engine.k_factor_breakdown(&input(1900.0, 1100.0, 3, DivisionTier::One, GameType::Season));

        assert!(close.competitive_balance < 1.0);
        assert!(wide.competitive_balance < close.competitive_balance);
        assert!(wide.competitive_balance > 0.0);
    }

    #[test]
    fn test_extreme_configuration_keeps_denominator_positive() {
        let config = RatingConfig {
            balance_scale: 0.0,
            balance_constant: 1e-12,
            balance_epsilon: 1e-6,
            ..Default::default()
        };
        let engine = EloEngine::new(config).unwrap();
        let breakdown = engine.k_factor_breakdown(&input(1500.0, 1500.0, 1, DivisionTier::Two, GameType::Season));
        assert!(breakdown.competitive_balance.is_finite());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RatingConfig {
            k_factor: 0.0,
            ..Default::default()
        };
        assert!(EloEngine::new(config).is_err());
    }

    #[test]
    fn test_config_json() {
        let engine = EloEngine::default();
        let config = RatingCalculator::config(&engine);
        assert_eq!(config["k_factor"], 32.0);
        assert_eq!(engine.default_rating(), 1500.0);
    }

    proptest! {
        #[test]
        fn prop_win_probabilities_are_complementary(a in -5000.0f64..5000.0, b in -5000.0f64..5000.0) {
            let sum = win_probability(a, b) + win_probability(b, a);
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_delta_sign_follows_surprise(
            a in 0.0f64..3000.0,
            b in 0.0f64..3000.0,
            margin in -60i64..60,
        ) {
            let engine = EloEngine::default();
            let game = input(a, b, margin, DivisionTier::One, GameType::Season);
            let result = engine.compute_rating_update(&game);
            let surprise = outcome_score(margin) - result.win_probability;

            if result.delta > 0 {
                prop_assert!(surprise > 0.0);
            }
            if result.delta < 0 {
                prop_assert!(surprise < 0.0);
            }
            prop_assert_eq!(result.new_rating, a + result.delta as f64);
        }

        #[test]
        fn prop_multiplier_is_symmetric_between_perspectives(
            a in 0.0f64..3000.0,
            b in 0.0f64..3000.0,
            margin in -60i64..60,
        ) {
            let engine = EloEngine::default();
            let game = input(a, b, margin, DivisionTier::Two, GameType::Playoff);
            let forward = engine.k_factor_breakdown(&game).total();
            let backward = engine.k_factor_breakdown(&game.reversed()).total();
            prop_assert!((forward - backward).abs() < 1e-12);
        }
    }
}
