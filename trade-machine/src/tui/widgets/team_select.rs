// Team selection widget: filterable player list for one side of the trade.
//
// Selected players are marked [x]; the focused list highlights its cursor
// row and draws a yellow border.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::trade::Side;
use crate::tui::{TeamSelection, ViewState};

/// Render the player list for `side` into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, side: Side) {
    let team = state.team(side);
    let focused = state.focus == side;
    let other = state.team(side.other());

    let items: Vec<ListItem> = state
        .visible_names()
        .into_iter()
        .map(|name| {
            let style = if other.is_selected(name) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(format!("{} {}", marker(team, name), name))).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(build_title(state, side)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(if focused { Color::Yellow } else { Color::DarkGray })
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(team.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Selection marker for a row.
pub fn marker(team: &TeamSelection, name: &str) -> &'static str {
    if team.is_selected(name) {
        "[x]"
    } else {
        "[ ]"
    }
}

/// "Team 1 (2 selected)", with the active filter appended.
fn build_title(state: &ViewState, side: Side) -> Line<'static> {
    let mut title = format!("{} ({} selected)", side, state.team(side).selected.len());
    if !state.filter_text.is_empty() {
        title.push_str(&format!(" \"{}\"", state.filter_text));
    }
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_reflects_selection() {
        let team = TeamSelection {
            cursor: 0,
            selected: vec!["LeBron James".into()],
        };
        assert_eq!(marker(&team, "LeBron James"), "[x]");
        assert_eq!(marker(&team, "Anthony Davis"), "[ ]");
    }

    #[test]
    fn title_counts_selection_and_shows_filter() {
        let mut state = ViewState::default();
        state.team_b.selected = vec!["A".into(), "B".into()];
        assert_eq!(build_title(&state, Side::B).to_string(), "Team 2 (2 selected)");

        state.filter_text = "jam".into();
        assert_eq!(
            build_title(&state, Side::A).to_string(),
            "Team 1 (0 selected) \"jam\""
        );
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(40, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, Side::A))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_players() {
        let backend = ratatui::backend::TestBackend::new(40, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.set_players(
            (0..30).map(|i| format!("Player {i}")).collect(),
            None,
        );
        state.team_a.cursor = 25;
        state.team_a.selected = vec!["Player 25".into()];
        state.team_b.selected = vec!["Player 3".into()];
        terminal
            .draw(|frame| {
                render(frame, frame.area(), &state, Side::A);
            })
            .unwrap();
    }
}
