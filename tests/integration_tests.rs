//! Integration tests for the league ratings engine
//!
//! These tests run complete games through the public API:
//! - Box score decoding, normalization and scoring
//! - Team rating updates for both sides of a game
//! - Batch processing and metrics
//! - The JSON shapes consumed by the league uploader

// Modules for organizing tests
mod fixtures;

use league_ratings::config::AppConfig;
use league_ratings::game::{process_batch, GameInput, GameProcessor};
use league_ratings::metrics::MetricsCollector;
use league_ratings::rating::{EloEngine, MockRatingCalculator, RatingCalculator};
use league_ratings::stats::StatCorrection;
use league_ratings::{DivisionTier, GameType, Role};
use std::sync::Arc;

use fixtures::{championship_game, simple_game, test_league};

fn create_test_processor() -> GameProcessor {
    GameProcessor::new(Arc::new(EloEngine::default()), test_league())
}

#[test]
fn test_championship_game_end_to_end() {
    let processor = create_test_processor();
    let report = processor.process_game(&championship_game()).unwrap();

    // Game-level fields
    assert_eq!(report.season, 4);
    assert_eq!(report.division, DivisionTier::One);
    assert_eq!(report.game_type, GameType::Final);
    // index 13 with four games a day
    assert_eq!(report.day, 4);
    assert_eq!(report.winning_team_id.as_deref(), Some("sharks"));

    // Team ratings: 1460 upsets 1560 by seven in a division 1 final
    assert_eq!(report.home_elo.average, 1460.0);
    assert_eq!(report.away_elo.average, 1560.0);
    assert_eq!(report.home_elo.net, 91);
    assert_eq!(report.away_elo.net, -91);
    assert_eq!(report.home_elo.new_rating, 1551.0);
    assert!((report.home_elo.win_probability - 0.36).abs() < 0.001);
    assert!((report.home_elo.win_probability + report.away_elo.win_probability - 1.0).abs() < 1e-9);

    // Receptions plus rushing yards plus passing yards
    assert_eq!(report.home_yards, 226);
    assert_eq!(report.away_yards, 121);

    let room_ids: Vec<u32> = report.players.iter().map(|p| p.room_id).collect();
    assert_eq!(room_ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_championship_game_player_lines() {
    let processor = create_test_processor();
    let report = processor.process_game(&championship_game()).unwrap();
    let player = |name: &str| report.players.iter().find(|p| p.name == name).unwrap();

    let gunslinger = player("Gunslinger");
    assert_eq!(gunslinger.role, Role::Quarterback);
    assert_eq!(gunslinger.passer_rating(), Some(122.9));
    assert_eq!(gunslinger.fantasy_points_qb, 19.5);
    assert_eq!(gunslinger.fantasy_points_receiver, 2.0);
    assert_eq!(gunslinger.stats.snaps.quarterback, 20);
    assert_eq!((gunslinger.wins, gunslinger.losses), (1, 0));
    assert_eq!(gunslinger.elo_change, Some(91));

    let speedster = player("Speedster");
    assert_eq!(speedster.role, Role::Receiver);
    assert_eq!(speedster.passer_rating(), None);
    assert_eq!(speedster.fantasy_points_receiver, 26.8);
    assert_eq!(speedster.fantasy_points_qb, 0.0);

    // Short row, zero-filled, default prior rating
    let comet_qb = player("Comet QB");
    assert_eq!(comet_qb.prior_rating, 1500.0);
    assert_eq!(comet_qb.role, Role::Quarterback);
    assert_eq!(comet_qb.passer_rating(), Some(134.0));
    assert_eq!(comet_qb.fantasy_points_qb, 10.0);
    assert_eq!(comet_qb.stats.passing.interceptions_thrown, 0);
    assert_eq!((comet_qb.wins, comet_qb.losses), (0, 1));
    assert_eq!(comet_qb.elo_change, Some(-91));

    // Yards without a catch are repaired to one reception
    let catcher = player("Catcher");
    assert_eq!(catcher.stats.receiving.receptions, 1);
    assert_eq!(catcher.fantasy_points_receiver, 5.5);
    assert_eq!(catcher.minutes_played, 26);
    assert_eq!(catcher.defensive_role, "NA");
    assert_eq!(catcher.points_for, 21);
    assert_eq!(catcher.points_against, 28);
}

#[test]
fn test_tie_game() {
    let processor = create_test_processor();
    let report = processor
        .process_game(&simple_game(17, 17, 1600.0, 1400.0))
        .unwrap();

    assert_eq!(report.winning_team_id, None);
    // The favourite drops rating on a tie, the underdog gains it
    assert_eq!(report.home_elo.net, -10);
    assert!(report.away_elo.net > 0);
    // Ties are booked as losses for both sides
    assert!(report.players.iter().all(|p| p.wins == 0 && p.losses == 1));
}

#[test]
fn test_rating_updates_are_zero_sum_at_equal_ratings() {
    let processor = create_test_processor();

    for (home_score, away_score) in [(7, 0), (0, 21), (35, 34), (3, 10)] {
        let report = processor
            .process_game(&simple_game(home_score, away_score, 1500.0, 1500.0))
            .unwrap();
        assert_eq!(report.home_elo.net, -report.away_elo.net);
    }
}

#[test]
fn test_malformed_row_names_the_team() {
    let processor = create_test_processor();
    let mut game = championship_game();
    game.away.players[1].cells = vec!["   ".to_string(), "10".to_string()];

    let err = processor.process_game(&game).unwrap_err();
    assert!(format!("{:#}", err).contains("comets"));
}

#[test]
fn test_mock_calculator_sees_both_perspectives() {
    let calculator = Arc::new(MockRatingCalculator::new(12));
    let processor = GameProcessor::new(calculator.clone(), test_league());

    let report = processor.process_game(&championship_game()).unwrap();
    assert_eq!(report.home_elo.net, 12);
    assert_eq!(report.away_elo.net, -12);

    let calls = calculator.get_calculation_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].reversed(), calls[1]);
    assert_eq!(calls[0].division, DivisionTier::One);
    assert_eq!(calls[0].team_a_margin_of_victory, 7);
}

#[tokio::test]
async fn test_batch_with_metrics() {
    let metrics = Arc::new(MetricsCollector::new().unwrap());
    let processor = Arc::new(create_test_processor().with_metrics(metrics.clone()));

    let games = vec![
        championship_game(),
        simple_game(14, 7, 1500.0, 1500.0),
        simple_game(3, 10, 1550.0, 1450.0),
    ];
    let reports = process_batch(processor, games).await.unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].home_team_id, "sharks");
    // Unscheduled games take their batch position
    assert_eq!(reports[1].day, 1);
    assert_eq!(reports[2].day, 1);

    assert_eq!(metrics.player().players_scored_total.get(), 8);
    assert_eq!(
        metrics
            .game()
            .games_processed_total
            .with_label_values(&["SEASON"])
            .get(),
        2
    );
    assert_eq!(
        metrics
            .player()
            .stat_corrections_total
            .with_label_values(&[StatCorrection::MissingReception.kind()])
            .get(),
        1
    );
    assert_eq!(metrics.game().games_failed_total.get(), 0);
}

#[test]
fn test_json_round_trip_for_uploader() {
    let input = r#"[{
        "game_type": "PLAYOFF",
        "index": 2,
        "played_at": "2024-03-09T20:00:00Z",
        "home": {"team_id": "owls", "score": 10, "players": [
            {"cells": ["Owl", "20", "2", "5", "1"], "prior_rating": 1510}
        ]},
        "away": {"team_id": "bats", "score": 3, "players": [
            {"cells": ["Bat", "0", "0", "0", "0", "60", "6", "9"]}
        ]}
    }]"#;

    let games: Vec<GameInput> = serde_json::from_str(input).unwrap();
    let report = create_test_processor().process_game(&games[0]).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["game_type"], "PLAYOFF");
    assert_eq!(json["division"], 2);
    assert_eq!(json["winning_team_id"], "owls");
    assert!(json["scheduled_date"].as_str().unwrap().starts_with("2024-03-09T20:00:00"));
    assert_eq!(json["duration"], 780);
    assert_eq!(json["is_ot"], false);
    assert_eq!(json["num_replays"], 1);

    let owl = &json["players"][0];
    assert_eq!(owl["poso"], "WR");
    assert_eq!(owl["posd"], "NA");
    assert_eq!(owl["w"], 1);
    assert_eq!(owl["minp"], 26);
    assert_eq!(owl["rec_c"], 2);
    assert!(owl["qb_rating"].is_null());

    let bat = &json["players"][1];
    assert_eq!(bat["poso"], "QB");
    assert_eq!(bat["room_id"], 2);
    assert_eq!(bat["snp_qb"], 9);
    assert!(bat["qb_rating"].is_number());
}

#[test]
fn test_engine_built_from_config() {
    let mut config = AppConfig::default();
    config.rating.k_factor = 16.0;

    let engine = EloEngine::new(config.rating.clone()).unwrap();
    assert_eq!(engine.default_rating(), 1500.0);

    let processor = GameProcessor::new(Arc::new(engine), test_league());
    let report = processor
        .process_game(&simple_game(7, 0, 1500.0, 1500.0))
        .unwrap();

    // Half the default K-factor halves the swing
    assert_eq!(report.home_elo.net, 27);
}
