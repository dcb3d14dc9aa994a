// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app, or
// into local ViewState mutations (focus, cursor, selection, filtering).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Rows moved by PageUp/PageDown in the rankings table.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press needs the app (evaluate,
/// refresh, reload, export, quit). Returns `None` when the key press was
/// handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Ignore Release/Repeat events so each physical press is handled once.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Tab | KeyCode::BackTab => {
            view_state.focus = view_state.focus.other();
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            let team = view_state.team_mut(view_state.focus);
            team.cursor = team.cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = view_state.visible_names().len().saturating_sub(1);
            let team = view_state.team_mut(view_state.focus);
            team.cursor = (team.cursor + 1).min(last);
            None
        }
        KeyCode::PageUp => {
            view_state.rankings_scroll = view_state.rankings_scroll.saturating_sub(PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            let rows = view_state.rankings.as_ref().map_or(0, |r| r.len());
            view_state.rankings_scroll =
                (view_state.rankings_scroll + PAGE_SIZE).min(rows.saturating_sub(1));
            None
        }

        KeyCode::Char(' ') => {
            if let Some(name) = view_state.name_under_cursor().map(str::to_string) {
                view_state.team_mut(view_state.focus).toggle(&name);
            }
            None
        }

        KeyCode::Char('/') => {
            view_state.filter_mode = true;
            None
        }
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.clamp_cursors();
            None
        }

        KeyCode::Enter | KeyCode::Char('e') => Some(UserCommand::EvaluateTrade {
            side_a: view_state.team_a.selected.clone(),
            side_b: view_state.team_b.selected.clone(),
        }),
        KeyCode::Char('c') => {
            view_state.team_a.selected.clear();
            view_state.team_b.selected.clear();
            view_state.trade = None;
            view_state.trade_error = None;
            None
        }

        KeyCode::Char('r') => {
            view_state.prefs = view_state.prefs.toggle_rankings();
            view_state
                .prefs
                .show_rankings
                .then_some(UserCommand::RefreshRankings)
        }
        KeyCode::Char('i') => {
            view_state.prefs = view_state.prefs.toggle_injured();
            view_state
                .prefs
                .show_injured
                .then_some(UserCommand::RefreshInjuries)
        }

        KeyCode::Char('R') => Some(UserCommand::ReloadData),
        KeyCode::Char('x') => Some(UserCommand::ExportRankings),
        KeyCode::Char('t') => Some(UserCommand::ExportTrade),
        KeyCode::Char('q') => Some(UserCommand::Quit),

        _ => None,
    }
}

/// Handle key events while in filter mode.
///
/// Printable characters extend the filter, Backspace removes one, Enter
/// leaves filter mode keeping the text, Esc leaves it clearing the text.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
        }
        _ => return None,
    }
    view_state.clamp_cursors();
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
