//! Chart widgets drawn straight into a ratatui buffer, usable from any
//! ratatui backend.

use crate::chart::BarChart;
use crate::Rgb;
use ratatui_core::buffer::Buffer;
use ratatui_core::layout::{Alignment, Rect};
use ratatui_core::style::{Color, Style};
use ratatui_core::text::Line;
use ratatui_core::widgets::Widget;

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Bar width in cells for a group slot of `slot` cells.
pub fn bar_width(slot: u16, series: usize, column_width_percent: u8) -> u16 {
    let series = u16::try_from(series.max(1)).unwrap_or(u16::MAX);
    let column = slot.saturating_mul(u16::from(column_width_percent)) / 100;
    (column / series).max(1)
}

/// Cell heights of each series in a stacked column, bottom first.
pub fn stack_heights(values: &[u64], max: u64, height: u16) -> Vec<u16> {
    if max == 0 {
        return vec![0; values.len()];
    }
    let mut cumulative = 0u64;
    let mut drawn = 0u16;
    values
        .iter()
        .map(|value| {
            cumulative += value;
            let top = u16::try_from(cumulative * u64::from(height) / max).unwrap_or(height);
            let cells = top.saturating_sub(drawn);
            drawn = drawn.max(top);
            cells
        })
        .collect()
}

/// Columns built from series segments stacked on top of each other, with
/// the category below and the column total above.
pub struct StackedColumns<'a> {
    chart: &'a BarChart,
}

impl<'a> StackedColumns<'a> {
    pub const fn new(chart: &'a BarChart) -> Self {
        Self { chart }
    }
}

impl Widget for StackedColumns<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chart = self.chart;
        if area.height < 3 || chart.categories.is_empty() {
            return;
        }

        let categories = u16::try_from(chart.categories.len()).unwrap_or(u16::MAX);
        let slot = area.width / categories;
        let width = bar_width(slot, 1, chart.column_width_percent);
        // Bottom row holds the category label, top row the column total.
        let plot_height = area.height - 2;
        let max = chart.max_column();

        for (index, category) in chart.categories.iter().enumerate() {
            let offset = u16::try_from(index).unwrap_or(0) * slot;
            let x = area.x + offset + slot.saturating_sub(width) / 2;
            let values = chart
                .series
                .iter()
                .map(|series| series.data.get(index).copied().unwrap_or(0))
                .collect::<Vec<_>>();

            let mut bottom = area.y + 1 + plot_height;
            for (series_index, cells) in stack_heights(&values, max, plot_height).into_iter().enumerate() {
                let fill = chart.colors.get(series_index).copied().map_or(Color::Gray, color);
                bottom -= cells;
                buf.set_style(Rect::new(x, bottom, width, cells), Style::default().bg(fill));
            }

            let label_area = Rect::new(area.x + offset, area.y + area.height - 1, slot, 1);
            Line::from(category.clone())
                .alignment(Alignment::Center)
                .render(label_area, buf);

            let total_area = Rect::new(area.x + offset, bottom.saturating_sub(1).max(area.y), slot, 1);
            Line::from(chart.tooltip(values.iter().sum()))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .render(total_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::comparison_chart;
    use crate::{ChartConfig, ProfileStatistics};
    use pretty_assertions::assert_eq;

    fn stats() -> ProfileStatistics {
        ProfileStatistics {
            ranking: 100,
            reputation: 50,
            contribution_points: 10,
            easy_solved: 30,
            medium_solved: 20,
            hard_solved: 5,
            total_easy: 600,
            total_medium: 1300,
            total_hard: 600,
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn columns_take_their_share_of_the_slot() {
        assert_eq!(bar_width(20, 2, 55), 5);
        assert_eq!(bar_width(20, 1, 55), 11);
    }

    #[test]
    fn narrow_slots_still_draw_a_bar() {
        assert_eq!(bar_width(1, 2, 55), 1);
        assert_eq!(bar_width(0, 0, 55), 1);
    }

    #[test]
    fn stacked_segments_fill_the_tallest_column() {
        assert_eq!(stack_heights(&[25, 75], 100, 20), vec![5, 15]);
        assert_eq!(stack_heights(&[10, 40], 100, 20), vec![2, 8]);
    }

    #[test]
    fn empty_chart_draws_nothing() {
        assert_eq!(stack_heights(&[0, 0], 0, 20), vec![0, 0]);
    }

    #[test]
    fn tallest_column_spans_the_plot_and_labels_sit_below() {
        let ChartConfig::Bar(chart) = comparison_chart(&stats()) else {
            panic!("comparison must be a bar chart");
        };
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);

        StackedColumns::new(&chart).render(area, &mut buf);

        // Medium (20 + 1300) is the tallest column; its slot starts at x = 10.
        let total = color(chart.colors[1]);
        assert_eq!(buf[(12, 1)].bg, total);
        assert_eq!(buf[(12, 10)].bg, total);
        let labels = row(&buf, 11);
        for category in ["Easy", "Medium", "Hard"] {
            assert!(labels.contains(category), "missing {category} in {labels:?}");
        }
    }
}
