use judge_stats_core::chart::{BarChart as BarConfig, ProportionChart, RadarChart};
use judge_stats_core::widgets::{bar_width, StackedColumns};
use judge_stats_core::{ChartConfig, ChartTarget, Rgb, SummaryTile};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
}

/// Number of filled cells for `value` out of `max` on a `width` cell track.
pub fn fill_cells(value: f64, max: f64, width: u16) -> usize {
    if !value.is_finite() || max <= 0.0 || value <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cells = ((value / max).min(1.0) * f64::from(width)).round() as usize;
    cells.max(1)
}

pub fn render_chart(
    f: &mut Frame<'_>,
    area: Rect,
    target: ChartTarget,
    config: Option<&ChartConfig>,
) {
    match config {
        Some(ChartConfig::Donut(chart) | ChartConfig::Pie(chart)) => {
            render_proportion(f, area, target.title(), chart);
        }
        Some(ChartConfig::Radar(chart)) => render_radar(f, area, target.title(), chart),
        Some(ChartConfig::Bar(chart)) => render_bars(f, area, target.title(), chart),
        None => {
            let paragraph = Paragraph::new("No data")
                .block(chart_block(target.title()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, area);
        }
    }
}

fn render_proportion(f: &mut Frame<'_>, area: Rect, title: &str, chart: &ProportionChart) {
    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let total = chart.total();
    let shares = chart.shares();
    let width = inner.width.saturating_sub(2);

    // Single strip split by share, the terminal stand-in for a pie.
    let mut strip = Vec::new();
    for (index, share) in shares.iter().enumerate() {
        let color = chart.colors.get(index).copied().map_or(Color::Gray, rgb);
        strip.push(Span::styled(
            "█".repeat(fill_cells(*share, 100.0, width)),
            Style::default().fg(color),
        ));
    }

    let mut lines = vec![TextLine::from(strip), TextLine::from("")];
    if let Some(center) = &chart.center_total {
        lines.push(TextLine::from(vec![
            Span::styled(format!("{}: ", center.label), Style::default().fg(Color::Gray)),
            Span::styled(
                center.value.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(TextLine::from(""));
    }

    for (index, label) in chart.labels.iter().enumerate() {
        let color = chart.colors.get(index).copied().map_or(Color::Gray, rgb);
        let count = chart.series.get(index).copied().unwrap_or(0);
        let mut spans = vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(label.clone(), Style::default().fg(Color::White)),
            Span::raw(format!("  {count}")),
        ];
        if chart.data_labels && total > 0 {
            let percent = shares.get(index).copied().unwrap_or(0.0);
            spans.push(Span::styled(
                format!(" ({percent:.1}%)"),
                Style::default().fg(Color::White).add_modifier(Modifier::DIM),
            ));
        }
        lines.push(TextLine::from(spans));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);
}

fn render_radar(f: &mut Frame<'_>, area: Rect, title: &str, chart: &RadarChart) {
    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let color = rgb(chart.color);
    let label_width = chart
        .categories
        .iter()
        .map(|category| category.chars().count())
        .max()
        .unwrap_or(0);
    let track = inner
        .width
        .saturating_sub(u16::try_from(label_width).unwrap_or(0) + 12);

    let mut lines = vec![TextLine::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::styled(chart.series_name.clone(), Style::default().fg(Color::White)),
    ])];
    lines.push(TextLine::from(""));

    for (category, value) in chart.categories.iter().zip(&chart.values) {
        let fill = fill_cells(*value, 100.0, track);
        let empty = usize::from(track).saturating_sub(fill);
        lines.push(TextLine::from(vec![
            Span::styled(
                format!("{category:<label_width$} "),
                Style::default().fg(Color::White),
            ),
            Span::styled("█".repeat(fill), Style::default().fg(color)),
            Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
            Span::raw(format!(" {}", chart.axis_format.format(*value))),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_bars(f: &mut Frame<'_>, area: Rect, title: &str, chart: &BarConfig) {
    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let mut legend = Vec::new();
    for (index, series) in chart.series.iter().enumerate() {
        let color = chart.colors.get(index).copied().map_or(Color::Gray, rgb);
        legend.push(Span::styled("■ ", Style::default().fg(color)));
        legend.push(Span::styled(
            format!("{}  ", series.name),
            Style::default().fg(Color::White),
        ));
    }
    legend.push(Span::styled(
        chart.y_axis_title.clone(),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(
        Paragraph::new(TextLine::from(legend)).alignment(Alignment::Center),
        split[0],
    );

    if chart.stacked {
        f.render_widget(StackedColumns::new(chart), split[1]);
    } else {
        f.render_widget(grouped(chart, split[1]), split[1]);
    }
}

fn grouped(chart: &BarConfig, area: Rect) -> BarChart<'static> {
    let categories = u16::try_from(chart.categories.len().max(1)).unwrap_or(u16::MAX);
    let series_count = u16::try_from(chart.series.len().max(1)).unwrap_or(1);
    let slot = area.width / categories;
    let width = bar_width(slot, chart.series.len(), chart.column_width_percent);

    let mut widget = BarChart::default()
        .bar_width(width)
        .bar_gap(0)
        .group_gap(slot.saturating_sub(width.saturating_mul(series_count)))
        .max(chart.max_column().max(1));

    for (index, category) in chart.categories.iter().enumerate() {
        let bars: Vec<Bar<'_>> = chart
            .series
            .iter()
            .enumerate()
            .map(|(series_index, series)| {
                let value = series.data.get(index).copied().unwrap_or(0);
                let color = chart.colors.get(series_index).copied().map_or(Color::Gray, rgb);
                Bar::default()
                    .value(value)
                    .text_value(chart.tooltip(value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();
        widget = widget.data(
            BarGroup::default()
                .label(TextLine::from(category.clone()))
                .bars(&bars),
        );
    }

    widget
}

pub fn render_summary(f: &mut Frame<'_>, area: Rect, tiles: &[SummaryTile]) {
    let spans = tiles
        .iter()
        .flat_map(|tile| {
            [
                Span::styled(format!("{}: ", tile.label), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}    ", tile.value),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(Text::from(TextLine::from(spans)))
        .block(
            Block::default()
                .title("Overview")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
