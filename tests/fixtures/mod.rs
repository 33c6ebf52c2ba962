//! Test fixtures for integration testing

use league_ratings::config::LeagueSettings;
use league_ratings::game::{GameInput, PlayerEntry, TeamBoxScore};
use league_ratings::{DivisionTier, GameType};

/// Build a roster entry from raw cells
pub fn entry(cells: &[&str], prior_rating: Option<f64>) -> PlayerEntry {
    PlayerEntry {
        cells: cells.iter().map(|cell| cell.to_string()).collect(),
        prior_rating,
    }
}

/// League used by most tests: season 4, division 2, eight teams
pub fn test_league() -> LeagueSettings {
    LeagueSettings {
        season: 4,
        division: DivisionTier::Two,
        teams: 8,
    }
}

/// A final played in division 1 that the home team wins 28-21
///
/// Home averages 1460 and away 1560. The away rows are short and one of
/// them records receiving yards without a reception.
pub fn championship_game() -> GameInput {
    GameInput {
        game_type: GameType::Final,
        division: Some(DivisionTier::One),
        index: Some(13),
        played_at: None,
        home: TeamBoxScore {
            team_id: "sharks".to_string(),
            score: 28,
            players: vec![
                // recyd rec ruyd ratt pyds cmp att pd tak tdp td intr intt
                entry(
                    &["Gunslinger", "0", "0", "10", "2", "210", "14", "20", "0", "1", "3", "0", "0", "1"],
                    Some(1450.0),
                ),
                entry(
                    &["Speedster", "88", "6", "0", "0", "0", "0", "0", "0", "2", "0", "2", "0", "0"],
                    Some(1470.0),
                ),
            ],
        },
        away: TeamBoxScore {
            team_id: "comets".to_string(),
            score: 21,
            players: vec![
                entry(&["Comet QB", "0", "0", "0", "0", "120", "9", "12", "0", "0", "1"], None),
                entry(&["Catcher", "45", "0"], Some(1620.0)),
            ],
        },
    }
}

/// A regular season game between two one-player rosters
pub fn simple_game(home_score: i64, away_score: i64, home_rating: f64, away_rating: f64) -> GameInput {
    GameInput {
        game_type: GameType::Season,
        division: None,
        index: None,
        played_at: None,
        home: TeamBoxScore {
            team_id: "home".to_string(),
            score: home_score,
            players: vec![entry(&["Home Player", "40", "4"], Some(home_rating))],
        },
        away: TeamBoxScore {
            team_id: "away".to_string(),
            score: away_score,
            players: vec![entry(&["Away Player", "25", "2"], Some(away_rating))],
        },
    }
}
