// Valuation engine: week clock, blended player scores, rankings.

pub mod ranking;
pub mod score;
pub mod week;

use crate::config::Config;

/// Number of weeks over which weight moves from projection to regular.
pub const SEASON_WEEKS: u32 = 20;

/// Lowest value any evaluated input or score may take.
pub const SCORE_FLOOR: f64 = 2.0;

/// Score assigned to each empty slot used to even out trade sides.
pub const FILLER_SCORE: f64 = 2.0;

/// Minimum fairness ratio for a trade to be approved.
pub const APPROVAL_THRESHOLD: f64 = 0.80;

/// Numeric knobs shared by scoring, ranking, and trade evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    pub season_weeks: u32,
    pub floor: f64,
    pub filler_score: f64,
    pub approval_threshold: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            season_weeks: SEASON_WEEKS,
            floor: SCORE_FLOOR,
            filler_score: FILLER_SCORE,
            approval_threshold: APPROVAL_THRESHOLD,
        }
    }
}

impl ScoringRules {
    pub fn from_config(config: &Config) -> Self {
        ScoringRules {
            season_weeks: config.season.weeks,
            floor: config.scoring.floor,
            filler_score: config.scoring.filler_score,
            approval_threshold: config.scoring.approval_threshold,
        }
    }
}
