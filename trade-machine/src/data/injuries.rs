// Injured-players view over the merged table.

use serde::Serialize;

use super::PlayerTable;

/// One row of the injured-players report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjuredPlayer {
    pub player_name: String,
    pub injury: String,
    pub status: String,
}

/// Every row whose injury is anything other than "Healthy" (case-insensitive),
/// in table order.
pub fn injured_players(table: &PlayerTable) -> Vec<InjuredPlayer> {
    table
        .iter()
        .filter(|r| !r.is_healthy())
        .map(|r| InjuredPlayer {
            player_name: r.player_name.clone(),
            injury: r.injury.clone(),
            status: r.status.clone(),
        })
        .collect()
}
