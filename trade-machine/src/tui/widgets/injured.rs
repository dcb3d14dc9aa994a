// Injured players widget: name, injury and status of everyone not healthy.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::data::injuries::InjuredPlayer;
use crate::tui::ViewState;

/// Render the injured player list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("Player"),
        Cell::from("Injury"),
        Cell::from("Status"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = if state.injuries.is_empty() {
        vec![Row::new(vec![Cell::from("No injured players.")])]
    } else {
        state
            .injuries
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(p.player_name.clone()),
                    Cell::from(p.injury.clone()),
                    Cell::from(p.status.clone()),
                ])
                .style(Style::default().fg(status_color(p)))
            })
            .collect()
    };

    let widths = [
        Constraint::Min(18),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Injured Players ({})", state.injuries.len())),
    );
    frame.render_widget(table, area);
}

/// Red for anyone ruled out, yellow otherwise.
pub fn status_color(player: &InjuredPlayer) -> Color {
    if player.status.to_lowercase().starts_with("out") {
        Color::Red
    } else {
        Color::Yellow
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn injured(status: &str) -> InjuredPlayer {
        InjuredPlayer {
            player_name: "Joel Embiid".into(),
            injury: "Knee".into(),
            status: status.into(),
        }
    }

    #[test]
    fn out_statuses_are_red() {
        assert_eq!(status_color(&injured("Out")), Color::Red);
        assert_eq!(status_color(&injured("Out For Season")), Color::Red);
        assert_eq!(status_color(&injured("Day-To-Day")), Color::Yellow);
    }

    #[test]
    fn render_does_not_panic_empty_or_filled() {
        let backend = ratatui::backend::TestBackend::new(60, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal.draw(|frame| render(frame, frame.area(), &state)).unwrap();

        state.injuries = vec![injured("Out"), injured("Questionable")];
        terminal.draw(|frame| render(frame, frame.area(), &state)).unwrap();
    }
}
