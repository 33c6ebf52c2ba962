//! Fixed-schema decoder for raw box score rows
//!
//! A row is the player's name followed by thirteen numeric columns whose
//! meaning is defined purely by position. Columns are addressed through
//! [`BoxColumn`] so nothing downstream depends on raw indices.

use crate::error::ScoringError;
use crate::stats::player::StatKey;
use crate::utils::parse_cell;
use tracing::debug;

/// Numeric columns of a box score row, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxColumn {
    ReceivingYards,
    Receptions,
    RushingYards,
    RushAttempts,
    PassingYards,
    Completions,
    PassAttempts,
    PassDeflections,
    Tackles,
    PassingTouchdowns,
    /// Receiving and rushing touchdowns share one column
    Touchdowns,
    InterceptionsCaught,
    InterceptionsThrown,
}

impl BoxColumn {
    pub const COUNT: usize = 13;

    pub const ALL: [BoxColumn; BoxColumn::COUNT] = [
        BoxColumn::ReceivingYards,
        BoxColumn::Receptions,
        BoxColumn::RushingYards,
        BoxColumn::RushAttempts,
        BoxColumn::PassingYards,
        BoxColumn::Completions,
        BoxColumn::PassAttempts,
        BoxColumn::PassDeflections,
        BoxColumn::Tackles,
        BoxColumn::PassingTouchdowns,
        BoxColumn::Touchdowns,
        BoxColumn::InterceptionsCaught,
        BoxColumn::InterceptionsThrown,
    ];

    /// Zero-based position among the numeric columns
    pub fn index(self) -> usize {
        self as usize
    }

    /// The normalized stat this column feeds
    pub fn stat_key(self) -> StatKey {
        match self {
            BoxColumn::ReceivingYards => StatKey::ReceivingYards,
            BoxColumn::Receptions => StatKey::Receptions,
            BoxColumn::RushingYards => StatKey::RushingYards,
            BoxColumn::RushAttempts => StatKey::RushAttempts,
            BoxColumn::PassingYards => StatKey::PassingYards,
            BoxColumn::Completions => StatKey::Completions,
            BoxColumn::PassAttempts => StatKey::PassAttempts,
            BoxColumn::PassDeflections => StatKey::PassDeflections,
            BoxColumn::Tackles => StatKey::Tackles,
            BoxColumn::PassingTouchdowns => StatKey::PassingTouchdowns,
            BoxColumn::Touchdowns => StatKey::ReceivingTouchdowns,
            BoxColumn::InterceptionsCaught => StatKey::InterceptionsCaught,
            BoxColumn::InterceptionsThrown => StatKey::InterceptionsThrown,
        }
    }
}

/// A decoded box score row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBoxRow {
    name: String,
    values: [i64; BoxColumn::COUNT],
}

impl PlayerBoxRow {
    /// Build a row from already parsed values
    pub fn new(name: impl Into<String>, values: [i64; BoxColumn::COUNT]) -> Self {
        Self {
            name: name.into().trim().to_string(),
            values,
        }
    }

    /// Decode raw table cells
    ///
    /// Unparseable numeric cells and missing trailing cells count as 0. A row
    /// without a player name, or with more stat cells than the schema has,
    /// is rejected.
    pub fn decode<S: AsRef<str>>(cells: &[S]) -> crate::error::Result<Self> {
        let (name, stats) = cells.split_first().ok_or_else(|| ScoringError::MalformedRow {
            reason: "row has no cells".to_string(),
        })?;

        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ScoringError::MalformedRow {
                reason: "row has an empty player name".to_string(),
            }
            .into());
        }

        if stats.len() > BoxColumn::COUNT {
            return Err(ScoringError::MalformedRow {
                reason: format!(
                    "expected at most {} stat columns for {}, found {}",
                    BoxColumn::COUNT,
                    name,
                    stats.len()
                ),
            }
            .into());
        }

        if stats.len() < BoxColumn::COUNT {
            debug!(
                player = name,
                columns = stats.len(),
                "Short box score row, missing columns count as 0"
            );
        }

        let mut values = [0; BoxColumn::COUNT];
        for (value, cell) in values.iter_mut().zip(stats) {
            *value = parse_cell(cell.as_ref());
        }

        Ok(Self::new(name, values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, column: BoxColumn) -> i64 {
        self.values[column.index()]
    }
}
