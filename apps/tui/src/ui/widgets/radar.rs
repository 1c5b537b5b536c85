use crate::ui::widgets::{chart_block, rgb};
use judge_stats_core::chart::RadarChart;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::f64::consts::{FRAC_PI_2, TAU};

const GRID_STEPS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Outer ring value: 100% unless some category is already past it.
pub fn axis_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(100.0, f64::max)
}

/// Canvas position of `value` on spoke `index` of `count`, first spoke at
/// twelve o'clock.
pub fn vertex(index: usize, count: usize, value: f64, max: f64) -> (f64, f64) {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    #[allow(clippy::cast_precision_loss)]
    let angle = TAU.mul_add(-(index as f64) / count.max(1) as f64, FRAC_PI_2);
    let radius = value / max;
    (radius * angle.cos(), radius * angle.sin())
}

fn polygon(points: &[(f64, f64)]) -> Vec<CanvasLine> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(from, to)| CanvasLine {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color: Color::DarkGray,
        })
        .collect()
}

pub fn render_radar(f: &mut Frame<'_>, area: Rect, title: &str, chart: &RadarChart) {
    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let color = rgb(chart.color);
    let count = chart.categories.len();
    let max = axis_max(&chart.values);
    let data = (0..count)
        .map(|index| vertex(index, count, chart.values.get(index).copied().unwrap_or(0.0), max))
        .collect::<Vec<_>>();
    let marker_radius = f64::from(chart.marker_size) * 0.01;

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for step in GRID_STEPS {
                    let ring = (0..count)
                        .map(|index| vertex(index, count, max * step, max))
                        .collect::<Vec<_>>();
                    for line in polygon(&ring) {
                        ctx.draw(&line);
                    }
                }
                for index in 0..count {
                    let (x, y) = vertex(index, count, max, max);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: Color::DarkGray,
                    });
                }

                ctx.layer();
                for line in polygon(&data) {
                    ctx.draw(&CanvasLine { color, ..line });
                }
                for (x, y) in &data {
                    ctx.draw(&Circle {
                        x: *x,
                        y: *y,
                        radius: marker_radius,
                        color,
                    });
                }

                for step in GRID_STEPS {
                    let (_, y) = vertex(0, count, max * step, max);
                    ctx.print(
                        0.03,
                        y,
                        TextLine::from(Span::styled(
                            chart.axis_format.format(max * step),
                            Style::default().fg(Color::Gray),
                        )),
                    );
                }
                for (index, category) in chart.categories.iter().enumerate() {
                    let (x, y) = vertex(index, count, max * 1.12, max);
                    ctx.print(
                        x - 0.1,
                        y,
                        TextLine::from(Span::styled(category.clone(), Style::default().fg(Color::White))),
                    );
                }
            })
            .x_bounds([-1.4, 1.4])
            .y_bounds([-1.0, 1.3]),
        split[0],
    );

    let values = chart
        .categories
        .iter()
        .zip(&chart.values)
        .map(|(category, value)| format!("{category} {}", chart.axis_format.format(*value)))
        .collect::<Vec<_>>()
        .join("  ");
    let legend = Paragraph::new(TextLine::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::styled(chart.series_name.clone(), Style::default().fg(Color::White)),
        Span::raw(format!("  {values}")),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(legend, split[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_grows_past_one_hundred_only_when_needed() {
        assert!((axis_max(&[5.0, 1.5, 0.8]) - 100.0).abs() < f64::EPSILON);
        assert!((axis_max(&[150.0, 20.0]) - 150.0).abs() < f64::EPSILON);
        assert!((axis_max(&[f64::NAN, f64::INFINITY]) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_spoke_points_up() {
        let (x, y) = vertex(0, 3, 100.0, 100.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_values_collapse_to_the_centre() {
        assert_eq!(vertex(1, 3, f64::NAN, 100.0), (0.0, 0.0));
        let (x, y) = vertex(2, 3, f64::INFINITY, 100.0);
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
    }
}
