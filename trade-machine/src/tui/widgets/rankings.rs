// Rankings widget: every player ordered by blended score for the current week.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::tui::ViewState;
use crate::valuation::ranking::{RankedPlayer, RankingTable};

/// Render the ranking table, starting at `state.rankings_scroll`.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(ref rankings) = state.rankings else {
        let paragraph = Paragraph::new("Loading rankings...")
            .block(Block::default().borders(Borders::ALL).title("Player Rankings"));
        frame.render_widget(paragraph, area);
        return;
    };

    let header = Row::new(
        rankings
            .columns()
            .into_iter()
            .map(Cell::from)
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = rankings
        .players
        .iter()
        .skip(state.rankings_scroll)
        .map(ranking_row)
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(22),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(build_title(rankings)),
    );
    frame.render_widget(table, area);
}

/// Cells for one ranked player. Inputs are shown as loaded, the total with
/// two decimals.
pub fn ranking_cells(player: &RankedPlayer) -> [String; 5] {
    [
        player.rank.to_string(),
        player.player_name.clone(),
        format!("{}", player.regular),
        format!("{}", player.projection),
        format!("{:.2}", player.total_score),
    ]
}

fn ranking_row(player: &RankedPlayer) -> Row<'static> {
    Row::new(ranking_cells(player).into_iter().map(Cell::from).collect::<Vec<_>>())
}

fn build_title(rankings: &RankingTable) -> String {
    format!(
        "Player Rankings, week {} ({} players)",
        rankings.week,
        rankings.len()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
