use judge_stats_core::SummaryTile;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_summary(f: &mut Frame<'_>, area: Rect, tiles: &[SummaryTile]) {
    if tiles.is_empty() {
        return;
    }

    let constraints = tiles
        .iter()
        .map(|_| Constraint::Ratio(1, u32::try_from(tiles.len()).unwrap_or(1)))
        .collect::<Vec<_>>();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, column) in tiles.iter().zip(columns.iter()) {
        let text = Text::from(vec![
            TextLine::from(Span::styled(
                tile.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                tile.label.clone(),
                Style::default().fg(Color::Gray),
            )),
        ]);

        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, *column);
    }
}
