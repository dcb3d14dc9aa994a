// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the parts of the application state
// it draws. Each key press that maps to a `UserCommand` is handled by the app
// to completion; the resulting `UiUpdate`s are applied to `ViewState` and the
// frame is re-rendered at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{info, warn};

use crate::app::{handle_user_command, AppState};
use crate::data::injuries::InjuredPlayer;
use crate::data::names::name_matches;
use crate::protocol::{DisplayPreferences, UiUpdate, UserCommand};
use crate::trade::{Side, TradeResult};
use crate::valuation::ranking::RankingTable;

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// TeamSelection
// ---------------------------------------------------------------------------

/// Selection state of one team list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSelection {
    /// Cursor position within the filtered player list.
    pub cursor: usize,
    /// Selected player names, in the order they were picked.
    pub selected: Vec<String>,
}

impl TeamSelection {
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    /// Add `name` if absent, remove it if present.
    pub fn toggle(&mut self, name: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == name) {
            self.selected.remove(pos);
        } else {
            self.selected.push(name.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Distinct player names in table order.
    pub player_names: Vec<String>,
    /// Newest modification time of the loaded data files.
    pub last_updated: Option<DateTime<Local>>,
    /// Which team list receives cursor movement and selection.
    pub focus: Side,
    pub team_a: TeamSelection,
    pub team_b: TeamSelection,
    /// Current filter/search text, applied to both team lists.
    pub filter_text: String,
    /// Whether the filter input is active.
    pub filter_mode: bool,
    pub prefs: DisplayPreferences,
    pub trade: Option<TradeResult>,
    /// Message from the last rejected evaluation.
    pub trade_error: Option<String>,
    pub rankings: Option<RankingTable>,
    pub injuries: Vec<InjuredPlayer>,
    /// First visible row of the rankings table.
    pub rankings_scroll: usize,
    /// Transient message shown in the status bar.
    pub status_message: Option<String>,
}

impl ViewState {
    pub fn team(&self, side: Side) -> &TeamSelection {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut TeamSelection {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    /// Player names matching the current filter, in table order.
    ///
    /// Matching is accent- and case-insensitive, so "doncic" finds
    /// "Luka Dončić".
    pub fn visible_names(&self) -> Vec<&str> {
        self.player_names
            .iter()
            .map(String::as_str)
            .filter(|name| name_matches(name, &self.filter_text))
            .collect()
    }

    /// Name under the cursor of the focused team list.
    pub fn name_under_cursor(&self) -> Option<&str> {
        let cursor = self.team(self.focus).cursor;
        self.visible_names().get(cursor).copied()
    }

    /// Keep both cursors inside the filtered list.
    pub fn clamp_cursors(&mut self) {
        let visible = self.visible_names().len();
        for side in [Side::A, Side::B] {
            let team = self.team_mut(side);
            team.cursor = team.cursor.min(visible.saturating_sub(1));
        }
    }

    /// Replace the player list after a (re)load. Selections of players no
    /// longer present are dropped and any previous trade result is cleared.
    pub fn set_players(&mut self, names: Vec<String>, last_updated: Option<DateTime<Local>>) {
        let mut distinct: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !distinct.contains(&name) {
                distinct.push(name);
            }
        }
        self.player_names = distinct;
        self.last_updated = last_updated;

        for side in [Side::A, Side::B] {
            let names = self.player_names.clone();
            self.team_mut(side)
                .selected
                .retain(|s| names.iter().any(|n| n == s));
        }
        self.trade = None;
        self.trade_error = None;
        self.clamp_cursors();
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::PlayersLoaded {
            names,
            last_updated,
        } => {
            state.set_players(names, last_updated);
            state.status_message = Some(format!("Loaded {} players", state.player_names.len()));
        }
        UiUpdate::TradeEvaluated(result) => {
            state.trade = Some(*result);
            state.trade_error = None;
        }
        UiUpdate::TradeRejected(message) => {
            state.trade = None;
            state.trade_error = Some(message);
        }
        UiUpdate::Rankings(rankings) => {
            state.rankings = Some(*rankings);
            state.rankings_scroll = 0;
        }
        UiUpdate::Injuries(injuries) => {
            state.injuries = injuries;
        }
        UiUpdate::Exported(path) => {
            state.status_message = Some(format!("Saved {}", path.display()));
        }
        UiUpdate::Error(message) => {
            state.status_message = Some(format!("Error: {message}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area(), state.prefs);

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::team_select::render(frame, layout.team_a, state, Side::A);
    widgets::team_select::render(frame, layout.team_b, state, Side::B);
    widgets::trade_result::render(frame, layout.trade_result, state);
    if let Some(area) = layout.rankings {
        widgets::rankings::render(frame, area, state);
    }
    if let Some(area) = layout.injured {
        widgets::injured::render(frame, area, state);
    }
    render_help_bar(frame, &layout, state);
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let text = help_text(state);
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

/// Keyboard hints. The toggle labels follow the current preferences.
pub fn help_text(state: &ViewState) -> String {
    if state.filter_mode {
        return " Type to filter | Enter:Keep | Esc:Clear".to_string();
    }
    format!(
        " Tab:Team | Space:Select | /:Filter | Enter:Evaluate | c:Clear | r:{} | i:{} | R:Reload | x:Export | t:Save trade | q:Quit",
        state.prefs.rankings_button_label(),
        state.prefs.injured_button_label(),
    )
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Loops over keyboard input and render ticks. Commands are handled
///    synchronously against `app` before the next event is read.
/// 4. Restores the terminal on exit.
pub async fn run(mut app: AppState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    for update in app.snapshot_updates(Local::now().date_naive()) {
        apply_ui_update(&mut view_state, update);
    }

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        let Some(cmd) = input::handle_key(key_event, &mut view_state) else {
                            continue;
                        };
                        if cmd == UserCommand::Quit {
                            info!("Quit requested");
                            break Ok(());
                        }
                        for update in handle_user_command(&mut app, cmd, Local::now()) {
                            apply_ui_update(&mut view_state, update);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal input error: {}", e);
                        break Err(e.into());
                    }
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PlayerRecord;
    use crate::data::PlayerTable;
    use crate::trade;
    use crate::valuation::ranking::rank_players;
    use crate::valuation::ScoringRules;
    use std::path::PathBuf;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn loaded_state() -> ViewState {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::PlayersLoaded {
                names: names(&["Luka Dončić", "LeBron James", "Anthony Davis"]),
                last_updated: None,
            },
        );
        state
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.player_names.is_empty());
        assert_eq!(state.focus, Side::A);
        assert!(state.team_a.selected.is_empty());
        assert!(state.team_b.selected.is_empty());
        assert!(!state.filter_mode);
        assert_eq!(state.prefs, DisplayPreferences::default());
        assert!(state.trade.is_none());
        assert!(state.rankings.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn team_selection_toggle_keeps_pick_order() {
        let mut team = TeamSelection::default();
        team.toggle("B");
        team.toggle("A");
        assert_eq!(team.selected, names(&["B", "A"]));
        team.toggle("B");
        assert_eq!(team.selected, names(&["A"]));
        assert!(team.is_selected("A"));
        assert!(!team.is_selected("B"));
    }

    #[test]
    fn players_loaded_dedupes_names() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::PlayersLoaded {
                names: names(&["Dup", "Other", "Dup"]),
                last_updated: None,
            },
        );
        assert_eq!(state.player_names, names(&["Dup", "Other"]));
        assert_eq!(state.status_message.as_deref(), Some("Loaded 2 players"));
    }

    #[test]
    fn reload_drops_missing_selections_and_clamps_cursor() {
        let mut state = loaded_state();
        state.team_a.selected = names(&["LeBron James", "Luka Dončić"]);
        state.team_b.cursor = 2;
        state.trade_error = Some("old".into());

        state.set_players(names(&["Luka Dončić"]), None);

        assert_eq!(state.team_a.selected, names(&["Luka Dončić"]));
        assert_eq!(state.team_b.cursor, 0);
        assert!(state.trade_error.is_none());
    }

    #[test]
    fn filter_is_accent_insensitive() {
        let mut state = loaded_state();
        state.filter_text = "doncic".into();
        assert_eq!(state.visible_names(), vec!["Luka Dončić"]);
        state.filter_text = "a".into();
        assert_eq!(state.visible_names().len(), 3);
    }

    #[test]
    fn name_under_cursor_follows_focus() {
        let mut state = loaded_state();
        state.team_b.cursor = 1;
        assert_eq!(state.name_under_cursor(), Some("Luka Dončić"));
        state.focus = Side::B;
        assert_eq!(state.name_under_cursor(), Some("LeBron James"));
    }

    #[test]
    fn trade_updates_replace_each_other() {
        let table = PlayerTable::new(vec![
            PlayerRecord::new("A", 10.0, 10.0),
            PlayerRecord::new("B", 10.0, 10.0),
        ]);
        let result =
            trade::evaluate(&table, 1, &["A"], &["B"], &ScoringRules::default()).unwrap();

        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::TradeRejected("nope".into()));
        assert_eq!(state.trade_error.as_deref(), Some("nope"));

        apply_ui_update(&mut state, UiUpdate::TradeEvaluated(Box::new(result)));
        assert!(state.trade.is_some());
        assert!(state.trade_error.is_none());

        apply_ui_update(&mut state, UiUpdate::TradeRejected("again".into()));
        assert!(state.trade.is_none());
    }

    #[test]
    fn rankings_update_resets_scroll() {
        let table = PlayerTable::new(vec![PlayerRecord::new("A", 10.0, 10.0)]);
        let mut state = ViewState::default();
        state.rankings_scroll = 7;
        apply_ui_update(
            &mut state,
            UiUpdate::Rankings(Box::new(rank_players(&table, 3, &ScoringRules::default()))),
        );
        assert_eq!(state.rankings.as_ref().map(|r| r.week), Some(3));
        assert_eq!(state.rankings_scroll, 0);
    }

    #[test]
    fn export_and_error_set_status() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Exported(PathBuf::from("exports/x.csv")));
        assert_eq!(state.status_message.as_deref(), Some("Saved exports/x.csv"));
        apply_ui_update(&mut state, UiUpdate::Error("disk full".into()));
        assert_eq!(state.status_message.as_deref(), Some("Error: disk full"));
    }

    #[test]
    fn help_text_tracks_preferences() {
        let mut state = ViewState::default();
        assert!(help_text(&state).contains("r:Show Player Rankings"));
        state.prefs = state.prefs.toggle_rankings().toggle_injured();
        assert!(help_text(&state).contains("r:Hide Player Rankings"));
        assert!(help_text(&state).contains("i:Hide Injured Players"));
        state.filter_mode = true;
        assert!(help_text(&state).starts_with(" Type to filter"));
    }

    #[test]
    fn render_frame_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(140, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = loaded_state();
        state.prefs = state.prefs.toggle_rankings().toggle_injured();
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
    }
}
