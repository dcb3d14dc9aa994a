// Blended player score: linear interpolation from projection to regular.

use serde::Serialize;

use super::ScoringRules;
use crate::data::PlayerRecord;

/// Raw week-weighted blend of the two performance figures.
///
/// `((W - week) * projection) / W + (week * regular) / W` with `W` the season
/// length. Week 0 is pure projection and week `W` pure regular; later weeks
/// give projection a negative weight. No floors are applied here.
pub fn blend(regular: f64, projection: f64, week: i64, season_weeks: u32) -> f64 {
    let w = week as f64;
    let n = f64::from(season_weeks);
    ((n - w) * projection) / n + (w * regular) / n
}

/// A player's inputs after flooring, and the resulting score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerScore {
    pub player_name: String,
    pub regular_eff: f64,
    pub projection_eff: f64,
    pub score: f64,
}

/// Score one player for trade evaluation.
///
/// Both inputs are raised to the floor before blending, and the blend is
/// raised to the floor again since out-of-season weeks can push it lower.
pub fn score_player(record: &PlayerRecord, week: i64, rules: &ScoringRules) -> PlayerScore {
    let regular_eff = record.regular.max(rules.floor);
    let projection_eff = record.projection.max(rules.floor);
    let score = blend(regular_eff, projection_eff, week, rules.season_weeks).max(rules.floor);

    PlayerScore {
        player_name: record.player_name.clone(),
        regular_eff,
        projection_eff,
        score,
    }
}

/// Shorthand for `score_player(..).score`.
pub fn player_score(record: &PlayerRecord, week: i64, rules: &ScoringRules) -> f64 {
    score_player(record, week, rules).score
}
