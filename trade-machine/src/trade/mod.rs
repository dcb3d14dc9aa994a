// Trade evaluation: two rosters, empty-slot padding, fairness ratio.

pub mod evaluate;
pub mod side;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use evaluate::evaluate;
pub use side::{Padding, TradeEntry, TradeResult, TradeSide};

/// One side of a trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Side::A => "Team 1",
            Side::B => "Team 2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rejected trade request. The loaded table is unaffected and the caller
/// may retry with a corrected selection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("player(s) selected for both teams: {}", .players.join(", "))]
    PlayersOnBothSides { players: Vec<String> },

    #[error("select players for at least one team to evaluate a trade")]
    EmptyTrade,

    #[error("unknown player: {name}")]
    UnknownPlayer { name: String },

    #[error("{side} total is zero; cannot compute a trade ratio")]
    DegenerateTotal { side: Side },
}
