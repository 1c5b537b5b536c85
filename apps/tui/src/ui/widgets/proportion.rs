use crate::ui::widgets::{chart_block, rgb};
use judge_stats_core::chart::{LegendPosition, ProportionChart};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use std::f64::consts::{FRAC_PI_2, TAU};

const RADIUS_STEPS: u32 = 28;
const ANGLE_STEPS: u32 = 240;
const DONUT_HOLE: f64 = 0.55;

/// Index of the segment covering `fraction` of the full turn.
pub fn segment_at(shares: &[f64], fraction: f64) -> Option<usize> {
    let mut upper = 0.0;
    for (index, share) in shares.iter().enumerate() {
        upper += share / 100.0;
        if fraction < upper {
            return Some(index);
        }
    }
    shares.iter().rposition(|share| *share > 0.0)
}

/// Sample points of each segment, starting at twelve o'clock and running
/// clockwise.
pub fn segment_points(shares: &[f64], inner_radius: f64) -> Vec<Vec<(f64, f64)>> {
    let mut segments = vec![Vec::new(); shares.len()];

    for r in 0..=RADIUS_STEPS {
        let radius = (1.0 - inner_radius).mul_add(f64::from(r) / f64::from(RADIUS_STEPS), inner_radius);
        for a in 0..ANGLE_STEPS {
            let fraction = f64::from(a) / f64::from(ANGLE_STEPS);
            let Some(index) = segment_at(shares, fraction) else {
                continue;
            };
            let angle = TAU.mul_add(-fraction, FRAC_PI_2);
            segments[index].push((radius * angle.cos(), radius * angle.sin()));
        }
    }

    segments
}

pub fn render_proportion(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    chart: &ProportionChart,
    donut: bool,
) {
    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if chart.total() == 0 {
        let paragraph = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let legend_height = u16::try_from(chart.labels.len()).unwrap_or(u16::MAX);
    let (chart_area, legend_area) = match chart.legend {
        LegendPosition::Bottom => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(legend_height)])
                .split(inner);
            (split[0], split[1])
        }
        LegendPosition::Top => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(legend_height), Constraint::Min(3)])
                .split(inner);
            (split[1], split[0])
        }
    };

    let shares = chart.shares();
    let inner_radius = if donut { DONUT_HOLE } else { 0.0 };
    let segments = segment_points(&shares, inner_radius);
    let colors: Vec<Color> = chart.colors.iter().map(|color| rgb(*color)).collect();

    // One terminal column in canvas units, used to centre the hole label.
    let column = 2.4 / f64::from(chart_area.width.max(1));
    let center = chart.center_total.as_ref().filter(|_| donut).map(|total| {
        (total.label.clone(), total.value.to_string())
    });

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for (index, points) in segments.iter().enumerate() {
                    ctx.draw(&Points {
                        coords: points,
                        color: colors.get(index).copied().unwrap_or(Color::Gray),
                    });
                }

                if let Some((label, value)) = &center {
                    ctx.layer();
                    #[allow(clippy::cast_precision_loss)]
                    let label_x = -(label.chars().count() as f64) * column / 2.0;
                    #[allow(clippy::cast_precision_loss)]
                    let value_x = -(value.chars().count() as f64) * column / 2.0;
                    ctx.print(
                        label_x,
                        0.12,
                        TextLine::from(Span::styled(label.clone(), Style::default().fg(Color::White))),
                    );
                    ctx.print(
                        value_x,
                        -0.12,
                        TextLine::from(Span::styled(
                            value.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )),
                    );
                }
            })
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.1, 1.1]),
        chart_area,
    );

    let legend_lines = chart
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let value = chart.series.get(index).copied().unwrap_or(0);
            let mut spans = vec![
                Span::styled("■ ", Style::default().fg(colors.get(index).copied().unwrap_or(Color::Gray))),
                Span::styled(label.clone(), Style::default().fg(Color::White)),
                Span::raw(format!("  {value}")),
            ];
            if chart.data_labels {
                let percent = shares.get(index).copied().unwrap_or(0.0);
                spans.push(Span::styled(
                    format!(" ({percent:.1}%)"),
                    Style::default().fg(Color::White).add_modifier(Modifier::DIM),
                ));
            }
            TextLine::from(spans)
        })
        .collect::<Vec<_>>();

    let legend = Paragraph::new(Text::from(legend_lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(legend, legend_area);
}
