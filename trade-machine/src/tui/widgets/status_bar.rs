// Status bar widget: player count, data freshness, last status message.

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [title] [player count] [last updated] [message]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            " Trade Machine ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} players", state.player_names.len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("Last updated: {}", format_last_updated(state.last_updated)),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(ref message) = state.status_message {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(message.clone(), message_style(message)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// `dd/mm/YYYY HH:MM`, or "unknown" when no modification time is available.
pub fn format_last_updated(last_updated: Option<DateTime<Local>>) -> String {
    last_updated
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn message_style(message: &str) -> Style {
    if message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_updated_formats_day_first() {
        let t = Local.with_ymd_and_hms(2025, 1, 7, 9, 5, 0).unwrap();
        assert_eq!(format_last_updated(Some(t)), "07/01/2025 09:05");
        assert_eq!(format_last_updated(None), "unknown");
    }

    #[test]
    fn errors_are_red() {
        assert_eq!(message_style("Error: no file").fg, Some(Color::Red));
        assert_eq!(message_style("Saved exports/a.csv").fg, Some(Color::Green));
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.status_message = Some("Loaded 0 players".into());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
