use crate::ui::widgets::{chart_block, rgb};
use judge_stats_core::chart::{BarChart as BarConfig, LegendPosition};
use judge_stats_core::widgets::{bar_width, StackedColumns};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

fn legend(chart: &BarConfig) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (index, series) in chart.series.iter().enumerate() {
        let color = chart.colors.get(index).copied().map_or(Color::Gray, rgb);
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!("{}  ", series.name),
            Style::default().fg(Color::White),
        ));
    }
    spans.push(Span::styled(
        chart.y_axis_title.clone(),
        Style::default().fg(Color::Gray),
    ));
    Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center)
}

fn grouped(chart: &BarConfig, area: Rect) -> BarChart<'static> {
    let categories = u16::try_from(chart.categories.len().max(1)).unwrap_or(u16::MAX);
    let series = u16::try_from(chart.series.len().max(1)).unwrap_or(1);
    let slot = area.width / categories;
    let width = bar_width(slot, chart.series.len(), chart.column_width_percent);

    let mut widget = BarChart::default()
        .bar_width(width)
        .bar_gap(0)
        .group_gap(slot.saturating_sub(width.saturating_mul(series)))
        .max(chart.max_column().max(1));

    for (index, category) in chart.categories.iter().enumerate() {
        let bars = chart
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
            .collect::<Vec<_>>();
        widget = widget.data(
            BarGroup::default()
                .label(TextLine::from(category.clone()))
                .bars(&bars),
        );
    }

    widget
}

pub fn render_bars(f: &mut Frame<'_>, area: Rect, title: &str, chart: &BarConfig) {
    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints(match chart.legend {
            LegendPosition::Top => [Constraint::Length(1), Constraint::Min(3)],
            LegendPosition::Bottom => [Constraint::Min(3), Constraint::Length(1)],
        })
        .split(inner);
    let (legend_area, bars_area) = match chart.legend {
        LegendPosition::Top => (split[0], split[1]),
        LegendPosition::Bottom => (split[1], split[0]),
    };
    f.render_widget(legend(chart), legend_area);

    if chart.stacked {
        f.render_widget(StackedColumns::new(chart), bars_area);
    } else {
        f.render_widget(grouped(chart, bars_area), bars_area);
    }
}
