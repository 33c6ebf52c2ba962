//! Normalized player stat record
//!
//! The record mirrors the schema the league uploader expects, so it carries
//! many fields this data source cannot observe. Those stay zero. Field names
//! on the wire are the uploader's short codes.

use serde::{Deserialize, Serialize};

/// Receiving and rushing production
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceivingStats {
    #[serde(rename = "rec_c")]
    pub receptions: i64,
    #[serde(rename = "rec_m")]
    pub receptions_mid: i64,
    #[serde(rename = "rec_d")]
    pub receptions_deep: i64,
    #[serde(rename = "rec_yd_c")]
    pub receiving_yards: i64,
    #[serde(rename = "rec_yd_m")]
    pub receiving_yards_mid: i64,
    #[serde(rename = "rec_yd_d")]
    pub receiving_yards_deep: i64,
    #[serde(rename = "rec_yd_ac")]
    pub yards_after_catch: i64,
    #[serde(rename = "ru_att")]
    pub rush_attempts: i64,
    #[serde(rename = "ru_yd")]
    pub rushing_yards: i64,
    #[serde(rename = "td_rec")]
    pub receiving_touchdowns: i64,
    #[serde(rename = "td_rush")]
    pub rushing_touchdowns: i64,
}

/// Passing production
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassingStats {
    #[serde(rename = "pa_c")]
    pub attempts: i64,
    #[serde(rename = "pa_m")]
    pub attempts_mid: i64,
    #[serde(rename = "pa_d")]
    pub attempts_deep: i64,
    #[serde(rename = "pc_c")]
    pub completions: i64,
    #[serde(rename = "pc_m")]
    pub completions_mid: i64,
    #[serde(rename = "pc_d")]
    pub completions_deep: i64,
    #[serde(rename = "pas_yd_c")]
    pub passing_yards: i64,
    #[serde(rename = "pas_yd_m")]
    pub passing_yards_mid: i64,
    #[serde(rename = "pas_yd_d")]
    pub passing_yards_deep: i64,
    #[serde(rename = "pas_yd_dis")]
    pub passing_distance: i64,
    #[serde(rename = "qb_rush_yds")]
    pub qb_rush_yards: i64,
    #[serde(rename = "qb_rush_att")]
    pub qb_rush_attempts: i64,
    #[serde(rename = "qb_sak")]
    pub times_sacked: i64,
    #[serde(rename = "td_pas")]
    pub passing_touchdowns: i64,
    #[serde(rename = "int_t")]
    pub interceptions_thrown: i64,
    #[serde(rename = "cpa")]
    pub contested_attempts: i64,
    #[serde(rename = "cpc")]
    pub contested_completions: i64,
    #[serde(rename = "cp_yds")]
    pub contested_yards: i64,
    #[serde(rename = "dis_bef_pass")]
    pub distance_before_pass: i64,
    #[serde(rename = "tim_to_pass")]
    pub time_to_pass: i64,
    /// Absent when the sample is too small to rate
    pub qb_rating: Option<f64>,
}

impl PassingStats {
    /// Attempts across every depth split
    pub fn total_attempts(&self) -> i64 {
        self.attempts
            .saturating_add(self.attempts_mid)
            .saturating_add(self.attempts_deep)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefensiveStats {
    #[serde(rename = "pd")]
    pub pass_deflections: i64,
    #[serde(rename = "tak")]
    pub tackles: i64,
    #[serde(rename = "sak")]
    pub sacks: i64,
    #[serde(rename = "int_r")]
    pub interceptions: i64,
}

/// Kicking, returns and penalties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialTeamsStats {
    #[serde(rename = "fg_a")]
    pub field_goal_attempts: i64,
    #[serde(rename = "fg_c")]
    pub field_goals_made: i64,
    #[serde(rename = "fg_ya_a")]
    pub field_goal_yards_attempted: i64,
    #[serde(rename = "fg_ya_c")]
    pub field_goal_yards_made: i64,
    #[serde(rename = "onside_a")]
    pub onside_attempts: i64,
    #[serde(rename = "onside_c")]
    pub onside_recoveries: i64,
    #[serde(rename = "spec_rec")]
    pub returns: i64,
    #[serde(rename = "spec_rec_yd")]
    pub return_yards: i64,
    #[serde(rename = "spec_rec_td")]
    pub return_touchdowns: i64,
    #[serde(rename = "spec_tak")]
    pub tackles: i64,
    #[serde(rename = "pen")]
    pub penalties: i64,
}

/// Snaps played by position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapCounts {
    #[serde(rename = "snp_qb")]
    pub quarterback: i64,
    #[serde(rename = "snp_wr")]
    pub receiver: i64,
    #[serde(rename = "snp_dr")]
    pub defensive_rusher: i64,
    #[serde(rename = "snp_mr")]
    pub middle_rusher: i64,
    #[serde(rename = "snp_fb")]
    pub fullback: i64,
    #[serde(rename = "snp_cb")]
    pub cornerback: i64,
    #[serde(rename = "snp_lb")]
    pub linebacker: i64,
    #[serde(rename = "snp_fs")]
    pub free_safety: i64,
}

/// A player's normalized stat line for one game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(flatten)]
    pub receiving: ReceivingStats,
    #[serde(flatten)]
    pub passing: PassingStats,
    #[serde(flatten)]
    pub defense: DefensiveStats,
    #[serde(flatten)]
    pub special_teams: SpecialTeamsStats,
    #[serde(flatten)]
    pub snaps: SnapCounts,
}

/// Stats that can be weighted by a scoring table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    Receptions,
    ReceivingYards,
    RushAttempts,
    RushingYards,
    ReceivingTouchdowns,
    RushingTouchdowns,
    PassAttempts,
    Completions,
    PassingYards,
    PassingTouchdowns,
    InterceptionsThrown,
    PassDeflections,
    Tackles,
    InterceptionsCaught,
    PasserRating,
}

impl PlayerStats {
    /// Value of a scoreable stat, `None` when it has no value for this player
    pub fn value(&self, key: StatKey) -> Option<f64> {
        let count = match key {
            StatKey::Receptions => self.receiving.receptions,
            StatKey::ReceivingYards => self.receiving.receiving_yards,
            StatKey::RushAttempts => self.receiving.rush_attempts,
            StatKey::RushingYards => self.receiving.rushing_yards,
            StatKey::ReceivingTouchdowns => self.receiving.receiving_touchdowns,
            StatKey::RushingTouchdowns => self.receiving.rushing_touchdowns,
            StatKey::PassAttempts => self.passing.attempts,
            StatKey::Completions => self.passing.completions,
            StatKey::PassingYards => self.passing.passing_yards,
            StatKey::PassingTouchdowns => self.passing.passing_touchdowns,
            StatKey::InterceptionsThrown => self.passing.interceptions_thrown,
            StatKey::PassDeflections => self.defense.pass_deflections,
            StatKey::Tackles => self.defense.tackles,
            StatKey::InterceptionsCaught => self.defense.interceptions,
            StatKey::PasserRating => return self.passing.qb_rating,
        };

        Some(count as f64)
    }
}
