// Column resolution for the two input tables, done once per load.

use super::table::RawTable;
use super::DataError;

pub const PLAYER_NAME_COLUMN: &str = "Player_Name";
pub const PLAYER_COLUMN: &str = "Player";
pub const REGULAR_COLUMN: &str = "Regular";
pub const PROJECTION_COLUMN: &str = "Projection";
pub const INJURY_COLUMN: &str = "Injury";
pub const STATUS_COLUMN: &str = "Status";

/// Which header names the player in the performance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityColumn {
    PlayerName,
    Player,
}

impl IdentityColumn {
    pub fn header(self) -> &'static str {
        match self {
            IdentityColumn::PlayerName => PLAYER_NAME_COLUMN,
            IdentityColumn::Player => PLAYER_COLUMN,
        }
    }
}

/// Resolved column positions of a performance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTableSchema {
    pub identity: IdentityColumn,
    pub identity_idx: usize,
    pub regular_idx: usize,
    pub projection_idx: usize,
}

impl PlayerTableSchema {
    /// Resolve the performance table's columns. `Player_Name` wins over
    /// `Player` when both are present.
    pub fn resolve(table: &RawTable) -> Result<Self, DataError> {
        let (identity, identity_idx) =
            if let Some(idx) = table.column_index(PLAYER_NAME_COLUMN) {
                (IdentityColumn::PlayerName, idx)
            } else if let Some(idx) = table.column_index(PLAYER_COLUMN) {
                (IdentityColumn::Player, idx)
            } else {
                return Err(DataError::MissingIdentityColumn {
                    table: "performance",
                });
            };

        let regular_idx = required(table, "performance", REGULAR_COLUMN)?;
        let projection_idx = required(table, "performance", PROJECTION_COLUMN)?;

        Ok(PlayerTableSchema {
            identity,
            identity_idx,
            regular_idx,
            projection_idx,
        })
    }
}

/// Resolved column positions of an injury report. `Injury` and `Status` are
/// optional; absent columns read as empty and get default-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjuryTableSchema {
    pub player_idx: usize,
    pub injury_idx: Option<usize>,
    pub status_idx: Option<usize>,
}

impl InjuryTableSchema {
    pub fn resolve(table: &RawTable) -> Result<Self, DataError> {
        Ok(InjuryTableSchema {
            player_idx: required(table, "injury", PLAYER_COLUMN)?,
            injury_idx: table.column_index(INJURY_COLUMN),
            status_idx: table.column_index(STATUS_COLUMN),
        })
    }
}

fn required(
    table: &RawTable,
    table_name: &'static str,
    column: &'static str,
) -> Result<usize, DataError> {
    table
        .column_index(column)
        .ok_or(DataError::MissingColumn {
            table: table_name,
            column,
        })
}
