// Application state: the session's player table snapshot and the handlers
// for every user command.
//
// The merged table is held behind an `Arc` and never mutated. A reload
// builds a fresh table and swaps the pointer, so a caller holding the old
// snapshot keeps a consistent view.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDate};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::data::injuries::{injured_players, InjuredPlayer};
use crate::data::loader::{load_player_table, LoadedData};
use crate::data::{DataError, PlayerTable};
use crate::protocol::{UiUpdate, UserCommand};
use crate::trade::{self, TradeResult, ValidationError};
use crate::valuation::ranking::{rank_players, RankingTable};
use crate::valuation::week::current_week;
use crate::valuation::ScoringRules;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state for one session.
pub struct AppState {
    pub config: Config,
    pub rules: ScoringRules,
    players: Arc<PlayerTable>,
    /// Newest modification time of the two data files at last load.
    pub last_updated: Option<DateTime<Local>>,
    /// Most recent successful evaluation, kept for export.
    pub last_trade: Option<TradeResult>,
}

impl AppState {
    /// Create an AppState around an already-loaded table.
    pub fn new(config: Config, loaded: LoadedData) -> Self {
        let rules = ScoringRules::from_config(&config);
        AppState {
            config,
            rules,
            players: Arc::new(loaded.table),
            last_updated: loaded.last_updated,
            last_trade: None,
        }
    }

    /// Load the tables named in the config and build the state.
    pub fn load(config: Config) -> Result<Self, DataError> {
        let loaded = load_player_table(&config.data_paths)?;
        info!("Loaded {} player rows", loaded.table.len());
        Ok(AppState::new(config, loaded))
    }

    /// The current immutable snapshot of the player table.
    pub fn players(&self) -> Arc<PlayerTable> {
        Arc::clone(&self.players)
    }

    /// Reload both data files. On failure the previous snapshot stays in
    /// place and the error is returned.
    pub fn reload(&mut self) -> Result<usize, DataError> {
        let loaded = load_player_table(&self.config.data_paths)?;
        let rows = loaded.table.len();
        self.players = Arc::new(loaded.table);
        self.last_updated = loaded.last_updated;
        self.last_trade = None;
        info!("Reloaded player data: {} rows", rows);
        Ok(rows)
    }

    pub fn week(&self, today: NaiveDate) -> i64 {
        current_week(today, self.config.season.start)
    }

    /// Evaluate a trade against the current snapshot.
    pub fn evaluate_trade(
        &mut self,
        side_a: &[String],
        side_b: &[String],
        today: NaiveDate,
    ) -> Result<TradeResult, ValidationError> {
        let players = self.players();
        let week = self.week(today);
        let result = trade::evaluate(&players, week, side_a, side_b, &self.rules)?;
        self.last_trade = Some(result.clone());
        Ok(result)
    }

    pub fn rankings(&self, today: NaiveDate) -> RankingTable {
        rank_players(&self.players, self.week(today), &self.rules)
    }

    pub fn injured(&self) -> Vec<InjuredPlayer> {
        injured_players(&self.players)
    }

    /// Write the current ranking to `Player_Scores_<dd_mm_YYYY>.csv` in the
    /// export directory and return the file path.
    pub fn export_rankings(&self, today: NaiveDate) -> anyhow::Result<PathBuf> {
        let dir = PathBuf::from(&self.config.data_paths.export_dir);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create export directory {}", dir.display()))?;

        let path = dir.join(format!("Player_Scores_{}.csv", today.format("%d_%m_%Y")));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.rankings(today)
            .write_csv(file)
            .with_context(|| format!("failed to write rankings to {}", path.display()))?;

        info!("Exported rankings to {}", path.display());
        Ok(path)
    }

    /// Write the last evaluated trade as JSON and return the file path.
    pub fn export_trade(&self, now: DateTime<Local>) -> anyhow::Result<PathBuf> {
        let result = self
            .last_trade
            .as_ref()
            .context("no trade has been evaluated yet")?;

        let dir = PathBuf::from(&self.config.data_paths.export_dir);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create export directory {}", dir.display()))?;

        let path = dir.join(format!("Trade_{}.json", now.format("%Y%m%d_%H%M%S")));
        let json = serde_json::to_string_pretty(result).context("failed to serialize trade")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!("Exported trade to {}", path.display());
        Ok(path)
    }

    /// Updates describing the whole current snapshot: player list, rankings
    /// and injuries. Sent at startup and after a reload.
    pub fn snapshot_updates(&self, today: NaiveDate) -> Vec<UiUpdate> {
        vec![
            UiUpdate::PlayersLoaded {
                names: self.players.names().into_iter().map(str::to_string).collect(),
                last_updated: self.last_updated,
            },
            UiUpdate::Rankings(Box::new(self.rankings(today))),
            UiUpdate::Injuries(self.injured()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Command handling
// ---------------------------------------------------------------------------

/// Handle one user command to completion and return the resulting updates.
///
/// No command failure is fatal: errors become `UiUpdate::Error` or
/// `UiUpdate::TradeRejected` and the session continues.
pub fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    now: DateTime<Local>,
) -> Vec<UiUpdate> {
    let today = now.date_naive();
    match cmd {
        UserCommand::EvaluateTrade { side_a, side_b } => {
            match state.evaluate_trade(&side_a, &side_b, today) {
                Ok(result) => vec![UiUpdate::TradeEvaluated(Box::new(result))],
                Err(e) => {
                    warn!("Trade rejected: {}", e);
                    vec![UiUpdate::TradeRejected(e.to_string())]
                }
            }
        }
        UserCommand::RefreshRankings => {
            vec![UiUpdate::Rankings(Box::new(state.rankings(today)))]
        }
        UserCommand::RefreshInjuries => vec![UiUpdate::Injuries(state.injured())],
        UserCommand::ReloadData => match state.reload() {
            Ok(_) => state.snapshot_updates(today),
            Err(e) => {
                error!("Reload failed, keeping previous data: {}", e);
                vec![UiUpdate::Error(format!("Failed to read data: {e}"))]
            }
        },
        UserCommand::ExportRankings => match state.export_rankings(today) {
            Ok(path) => vec![UiUpdate::Exported(path)],
            Err(e) => {
                error!("Ranking export failed: {:#}", e);
                vec![UiUpdate::Error(format!("{e:#}"))]
            }
        },
        UserCommand::ExportTrade => match state.export_trade(now) {
            Ok(path) => vec![UiUpdate::Exported(path)],
            Err(e) => vec![UiUpdate::Error(format!("{e:#}"))],
        },
        UserCommand::Quit => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
