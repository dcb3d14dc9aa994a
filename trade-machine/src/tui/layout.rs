// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------+-------------+----------------------+
// | Team 1 (30%) | Team 2 (30%) | Trade Result (40%)   |
// +-------------+-------------+----------------------+
// | Rankings (60%)             | Injured (40%)        |  only when shown
// +----------------------------+----------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// When only one of rankings/injured is shown it takes the full width.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::protocol::DisplayPreferences;

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: player count, last updated time, status message.
    pub status_bar: Rect,
    pub team_a: Rect,
    pub team_b: Rect,
    pub trade_result: Rect,
    /// Ranking table, present only when shown.
    pub rankings: Option<Rect>,
    /// Injured player list, present only when shown.
    pub injured: Option<Rect>,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area and the
/// current display preferences.
pub fn build_layout(area: Rect, prefs: DisplayPreferences) -> AppLayout {
    let lower_shown = prefs.show_rankings || prefs.show_injured;

    // status(1) | selection + result(fill) | lower(45%, if shown) | help(1)
    let constraints = if lower_shown {
        vec![
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Percentage(45),
            Constraint::Length(1),
        ]
    } else {
        vec![Constraint::Length(1), Constraint::Min(8), Constraint::Length(1)]
    };
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let lower = if lower_shown { vertical[2] } else { Rect::default() };
    let help_bar = vertical[vertical.len() - 1];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(middle);

    let (rankings, injured) = match (prefs.show_rankings, prefs.show_injured) {
        (true, true) => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(lower);
            (Some(split[0]), Some(split[1]))
        }
        (true, false) => (Some(lower), None),
        (false, true) => (None, Some(lower)),
        (false, false) => (None, None),
    };

    AppLayout {
        status_bar,
        team_a: horizontal[0],
        team_b: horizontal[1],
        trade_result: horizontal[2],
        rankings,
        injured,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
