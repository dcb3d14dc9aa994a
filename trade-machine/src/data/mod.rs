// Player data: tabular input, schema resolution, the injury merge, and the
// canonical player table every scoring call reads from.

pub mod injuries;
pub mod loader;
pub mod merge;
pub mod names;
pub mod schema;
pub mod table;

use serde::{Deserialize, Serialize};

/// Injury value used when a player has no row in the injury report.
pub const DEFAULT_INJURY: &str = "Healthy";

/// Status value used when a player has no row in the injury report.
pub const DEFAULT_STATUS: &str = "Active";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Malformed or ambiguous input tables. Fatal for the load/merge that
/// produced it; no partial table is returned.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{table} table has neither a `Player_Name` nor a `Player` column")]
    MissingIdentityColumn { table: &'static str },

    #[error("{table} table is missing required column `{column}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("row {row} ({player}): missing value for `{column}`")]
    MissingValue {
        row: usize,
        player: String,
        column: &'static str,
    },

    #[error("row {row} ({player}): `{column}` value {value:?} is not a finite number")]
    InvalidNumber {
        row: usize,
        player: String,
        column: &'static str,
        value: String,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Canonical player table
// ---------------------------------------------------------------------------

/// One row of the merged table.
///
/// `regular` and `projection` are stored exactly as loaded. The score floor is
/// applied by the valuation code, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_name: String,
    pub regular: f64,
    pub projection: f64,
    pub injury: String,
    pub status: String,
}

impl PlayerRecord {
    /// Build a record with default injury fields.
    pub fn new(player_name: impl Into<String>, regular: f64, projection: f64) -> Self {
        PlayerRecord {
            player_name: player_name.into(),
            regular,
            projection,
            injury: DEFAULT_INJURY.to_string(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.injury.to_lowercase() == DEFAULT_INJURY.to_lowercase()
    }
}

/// The merged player table. Row order is the performance table's order
/// (with injury fan-out rows kept adjacent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerTable {
    records: Vec<PlayerRecord>,
}

impl PlayerTable {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        PlayerTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }

    /// Exact-match lookup on `player_name`. When a name appears more than
    /// once, the first row wins.
    pub fn find(&self, player_name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.player_name == player_name)
    }

    /// Player names in table order, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.player_name.as_str()).collect()
    }
}

impl FromIterator<PlayerRecord> for PlayerTable {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        PlayerTable::new(iter.into_iter().collect())
    }
}
