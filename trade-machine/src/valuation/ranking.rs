// Player rankings over the full table.
//
// Rankings blend the loaded values directly: unlike trade evaluation, no
// floor is applied to the inputs or to the result.

use std::io::Write;

use serde::Serialize;

use super::score::blend;
use super::ScoringRules;
use crate::data::table::RawTable;
use crate::data::PlayerTable;

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    /// 1-based position after sorting.
    pub rank: usize,
    pub player_name: String,
    pub regular: f64,
    pub projection: f64,
    /// Blend rounded to two decimals.
    pub total_score: f64,
}

/// The ranking view for a given week, sorted by descending score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingTable {
    pub week: i64,
    pub players: Vec<RankedPlayer>,
}

/// Round to two decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Rank every row of `table` for `week`.
///
/// Scores are the unfloored blend rounded to two decimals. The sort is stable,
/// so equal scores keep table order.
pub fn rank_players(table: &PlayerTable, week: i64, rules: &ScoringRules) -> RankingTable {
    let mut players: Vec<RankedPlayer> = table
        .iter()
        .map(|r| RankedPlayer {
            rank: 0,
            player_name: r.player_name.clone(),
            regular: r.regular,
            projection: r.projection,
            total_score: round2(blend(r.regular, r.projection, week, rules.season_weeks)),
        })
        .collect();

    players.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    for (i, p) in players.iter_mut().enumerate() {
        p.rank = i + 1;
    }

    RankingTable { week, players }
}

impl RankingTable {
    pub fn score_column(&self) -> String {
        format!("Total_Score (Week {})", self.week)
    }

    /// Header names in display/export order.
    pub fn columns(&self) -> Vec<String> {
        vec![
            "Rank".to_string(),
            "Player_Name".to_string(),
            "Regular".to_string(),
            "Projection".to_string(),
            self.score_column(),
        ]
    }

    /// The ranking as a generic string table.
    pub fn to_table(&self) -> RawTable {
        let rows = self
            .players
            .iter()
            .map(|p| {
                vec![
                    p.rank.to_string(),
                    p.player_name.clone(),
                    p.regular.to_string(),
                    p.projection.to_string(),
                    format!("{:.2}", p.total_score),
                ]
            })
            .collect();
        RawTable::new(self.columns(), rows)
    }

    pub fn write_csv<W: Write>(&self, wtr: W) -> Result<(), csv::Error> {
        self.to_table().write_csv(wtr)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
