pub mod bars;
pub mod popup;
pub mod proportion;
pub mod radar;
pub mod summary;

use judge_stats_core::{ChartConfig, ChartTarget, Rgb};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Draws whatever chart is mounted on `target`, or an empty frame.
pub fn render_chart(f: &mut Frame<'_>, area: Rect, target: ChartTarget, config: Option<&ChartConfig>) {
    match config {
        Some(ChartConfig::Donut(chart)) => {
            proportion::render_proportion(f, area, target.title(), chart, true);
        }
        Some(ChartConfig::Pie(chart)) => {
            proportion::render_proportion(f, area, target.title(), chart, false);
        }
        Some(ChartConfig::Radar(chart)) => radar::render_radar(f, area, target.title(), chart),
        Some(ChartConfig::Bar(chart)) => bars::render_bars(f, area, target.title(), chart),
        None => {
            let paragraph = Paragraph::new("No data")
                .block(chart_block(target.title()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, area);
        }
    }
}
