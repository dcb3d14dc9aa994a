// Trade result widget: per-side scores, totals, ratio and verdict.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::trade::{Side, TradeEntry, TradeResult};
use crate::tui::ViewState;

/// Render the latest evaluation, rejection message, or a hint.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let lines = match (&state.trade, &state.trade_error) {
        (_, Some(message)) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        (Some(result), None) => result_lines(result),
        (None, None) => vec![Line::from(Span::styled(
            "Select players for each team and press Enter to evaluate.",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Trade Result"));
    frame.render_widget(paragraph, area);
}

/// Lines describing a completed evaluation.
pub fn result_lines(result: &TradeResult) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(format!("Week {}", result.week), bold))];

    for side in [Side::A, Side::B] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(side.label().to_string(), bold)));
        for entry in &result.side(side).entries {
            lines.push(Line::from(entry_text(entry)));
        }
        lines.push(Line::from(format!("  Total: {:.2}", result.total(side))));
    }

    lines.push(Line::from(""));
    if let Some(note) = result.padding_note() {
        lines.push(Line::from(Span::styled(note, Style::default().fg(Color::Cyan))));
    }
    lines.push(Line::from(format!("Trade ratio: {:.2}", result.ratio)));

    let (verdict, color) = verdict(result);
    lines.push(Line::from(Span::styled(
        verdict,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines
}

/// One line per trade slot, e.g. "  LeBron James  SCORE: 44.80".
pub fn entry_text(entry: &TradeEntry) -> String {
    match entry {
        TradeEntry::Player(p) => format!("  {}  SCORE: {:.2}", p.player_name, p.score),
        TradeEntry::Filler { score } => format!("  (empty slot)  SCORE: {score:.2}"),
    }
}

pub fn verdict(result: &TradeResult) -> (&'static str, Color) {
    if result.approved {
        ("Trade Approved", Color::Green)
    } else {
        ("Trade Not Approved", Color::Red)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
