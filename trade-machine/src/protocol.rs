// Messages exchanged between the TUI and the application state.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::data::injuries::InjuredPlayer;
use crate::trade::TradeResult;
use crate::valuation::ranking::RankingTable;

// ---------------------------------------------------------------------------
// TUI -> app
// ---------------------------------------------------------------------------

/// Actions the user can trigger. Each is handled to completion before the
/// next key press is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    EvaluateTrade {
        side_a: Vec<String>,
        side_b: Vec<String>,
    },
    RefreshRankings,
    RefreshInjuries,
    ReloadData,
    ExportRankings,
    ExportTrade,
    Quit,
}

// ---------------------------------------------------------------------------
// app -> TUI
// ---------------------------------------------------------------------------

/// State changes pushed to the TUI after handling a command.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// A (re)loaded player table: names in table order.
    PlayersLoaded {
        names: Vec<String>,
        last_updated: Option<DateTime<Local>>,
    },
    TradeEvaluated(Box<TradeResult>),
    TradeRejected(String),
    Rankings(Box<RankingTable>),
    Injuries(Vec<InjuredPlayer>),
    Exported(PathBuf),
    Error(String),
}

// ---------------------------------------------------------------------------
// Display preferences
// ---------------------------------------------------------------------------

/// Which optional sections are visible. Owned by the TUI and passed
/// explicitly; nothing here is global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub show_rankings: bool,
    pub show_injured: bool,
}

impl DisplayPreferences {
    /// Flip rankings visibility and return the new preferences.
    pub fn toggle_rankings(self) -> Self {
        DisplayPreferences {
            show_rankings: !self.show_rankings,
            ..self
        }
    }

    /// Flip injured-players visibility and return the new preferences.
    pub fn toggle_injured(self) -> Self {
        DisplayPreferences {
            show_injured: !self.show_injured,
            ..self
        }
    }

    pub fn rankings_button_label(&self) -> &'static str {
        if self.show_rankings {
            "Hide Player Rankings"
        } else {
            "Show Player Rankings"
        }
    }

    pub fn injured_button_label(&self) -> &'static str {
        if self.show_injured {
            "Hide Injured Players"
        } else {
            "Show Injured Players"
        }
    }
}
