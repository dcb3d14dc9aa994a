// Trade sides and the evaluation result.

use serde::Serialize;

use super::Side;
use crate::valuation::score::PlayerScore;

/// A slot on one side of a trade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeEntry {
    Player(PlayerScore),
    /// Synthetic empty slot added to even out roster sizes.
    Filler { score: f64 },
}

impl TradeEntry {
    pub fn score(&self) -> f64 {
        match self {
            TradeEntry::Player(p) => p.score,
            TradeEntry::Filler { score } => *score,
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, TradeEntry::Filler { .. })
    }
}

/// Ordered entries for one side: selected players first, then fillers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeSide {
    pub entries: Vec<TradeEntry>,
}

impl TradeSide {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(TradeEntry::score).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filler_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_filler()).count()
    }

    /// Append `count` fillers of `score` each.
    pub fn pad(&mut self, count: usize, score: f64) {
        self.entries
            .extend(std::iter::repeat(TradeEntry::Filler { score }).take(count));
    }
}

/// Which side received empty slots, and how many.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub side: Side,
    pub slots: usize,
    pub score_each: f64,
}

/// Outcome of a trade evaluation. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeResult {
    pub week: i64,
    pub side_a: TradeSide,
    pub side_b: TradeSide,
    pub side_a_total: f64,
    pub side_b_total: f64,
    /// `min(a / b, b / a)`, in `(0, 1]`.
    pub ratio: f64,
    pub approved: bool,
    pub padding: Option<Padding>,
}

impl TradeResult {
    pub fn side(&self, side: Side) -> &TradeSide {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    pub fn total(&self, side: Side) -> f64 {
        match side {
            Side::A => self.side_a_total,
            Side::B => self.side_b_total,
        }
    }

    /// Human-readable note about empty slots, if any were added.
    pub fn padding_note(&self) -> Option<String> {
        self.padding.map(|p| {
            format!(
                "{} receives {} empty slot(s) with SCORE: {:.2} each.",
                p.side, p.slots, p.score_each
            )
        })
    }
}
