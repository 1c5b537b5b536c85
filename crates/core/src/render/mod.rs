//! Maps [`ProfileStatistics`] onto the summary panel and the four charts.
//!
//! The `*_chart` builders are pure; [`ChartRenderer`] pushes their output
//! through a [`UiPort`] and keeps the chart lifecycle in a [`ChartRegistry`].

pub mod registry;

use crate::chart::{
    BarChart, BarSeries, CenterTotal, ChartConfig, ChartTarget, LegendPosition, PercentFormat,
    ProportionChart, RadarChart, Rgb,
};
use crate::domain::{Difficulty, ProfileStatistics};
use crate::port::{SummaryTile, UiPort};
use serde::Serialize;

pub use registry::{ChartInstance, ChartRegistry, Lifecycle};

pub const CHART_HEIGHT: u16 = 350;

pub const SOLVED_PALETTE: [Rgb; 3] = [
    Rgb(0x4a, 0xde, 0x80),
    Rgb(0xfb, 0xbf, 0x24),
    Rgb(0xf8, 0x71, 0x71),
];
pub const TOTAL_PALETTE: [Rgb; 3] = [
    Rgb(0x60, 0xa5, 0xfa),
    Rgb(0x81, 0x8c, 0xf8),
    Rgb(0xa7, 0x8b, 0xfa),
];
pub const PROGRESS_COLOR: Rgb = Rgb(0x8b, 0x5c, 0xf6);
pub const COMPARISON_PALETTE: [Rgb; 2] = [Rgb(0x60, 0xa5, 0xfa), Rgb(0xf4, 0x72, 0xb6)];

pub fn summary_tiles(stats: &ProfileStatistics) -> Vec<SummaryTile> {
    vec![
        SummaryTile::new("Ranking", stats.ranking),
        SummaryTile::new("Reputation", stats.reputation),
        SummaryTile::new("Contribution Points", stats.contribution_points),
    ]
}

fn per_tier(value: impl Fn(Difficulty) -> u32) -> Vec<u64> {
    Difficulty::ALL
        .iter()
        .map(|tier| u64::from(value(*tier)))
        .collect()
}

pub fn solved_distribution_chart(stats: &ProfileStatistics) -> ChartConfig {
    ChartConfig::Donut(ProportionChart {
        labels: Difficulty::labels(),
        series: per_tier(|tier| tier.solved(stats)),
        colors: SOLVED_PALETTE.to_vec(),
        center_total: Some(CenterTotal {
            label: "Total Solved".to_string(),
            value: stats.total_solved(),
        }),
        data_labels: true,
        legend: LegendPosition::Bottom,
        height: CHART_HEIGHT,
    })
}

pub fn total_available_chart(stats: &ProfileStatistics) -> ChartConfig {
    ChartConfig::Pie(ProportionChart {
        labels: Difficulty::labels(),
        series: per_tier(|tier| tier.total(stats)),
        colors: TOTAL_PALETTE.to_vec(),
        center_total: None,
        data_labels: true,
        legend: LegendPosition::Bottom,
        height: CHART_HEIGHT,
    })
}

pub fn progress_chart(stats: &ProfileStatistics) -> ChartConfig {
    ChartConfig::Radar(RadarChart {
        series_name: "Progress".to_string(),
        categories: Difficulty::labels(),
        values: Difficulty::ALL
            .iter()
            .map(|tier| tier.progress(stats))
            .collect(),
        color: PROGRESS_COLOR,
        fill_opacity: 0.5,
        marker_size: 5,
        axis_format: PercentFormat { decimals: 0 },
        height: CHART_HEIGHT,
    })
}

pub fn comparison_chart(stats: &ProfileStatistics) -> ChartConfig {
    ChartConfig::Bar(BarChart {
        categories: Difficulty::labels(),
        series: vec![
            BarSeries {
                name: "Solved".to_string(),
                data: per_tier(|tier| tier.solved(stats)),
            },
            BarSeries {
                name: "Total".to_string(),
                data: per_tier(|tier| tier.total(stats)),
            },
        ],
        colors: COMPARISON_PALETTE.to_vec(),
        stacked: true,
        column_width_percent: 55,
        y_axis_title: "Number of Questions".to_string(),
        tooltip_suffix: " questions".to_string(),
        legend: LegendPosition::Top,
        height: CHART_HEIGHT,
    })
}

pub fn build_chart(target: ChartTarget, stats: &ProfileStatistics) -> ChartConfig {
    match target {
        ChartTarget::SolvedDistribution => solved_distribution_chart(stats),
        ChartTarget::TotalAvailable => total_available_chart(stats),
        ChartTarget::Progress => progress_chart(stats),
        ChartTarget::Comparison => comparison_chart(stats),
    }
}

/// Everything one render pass produces, in render order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: Vec<SummaryTile>,
    pub charts: Vec<(ChartTarget, ChartConfig)>,
}

pub fn build_dashboard(stats: &ProfileStatistics) -> Dashboard {
    Dashboard {
        summary: summary_tiles(stats),
        charts: ChartTarget::ALL
            .iter()
            .map(|target| (*target, build_chart(*target, stats)))
            .collect(),
    }
}

#[derive(Debug, Default)]
pub struct ChartRenderer {
    registry: ChartRegistry,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the five rendering calls for `stats`.
    pub fn render<P: UiPort + ?Sized>(&mut self, stats: &ProfileStatistics, port: &P) {
        let dashboard = build_dashboard(stats);
        port.render_summary(&dashboard.summary);
        for (target, config) in &dashboard.charts {
            self.registry.mount(port, *target, config);
        }
    }

    pub fn teardown<P: UiPort + ?Sized>(&mut self, port: &P) {
        self.registry.teardown(port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::recording::{RecordingPort, UiCall};
    use pretty_assertions::assert_eq;

    fn alice() -> ProfileStatistics {
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

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn summary_lists_ranking_reputation_contribution() {
        let tiles = summary_tiles(&alice());
        let pairs: Vec<(&str, &str)> = tiles
            .iter()
            .map(|tile| (tile.label.as_str(), tile.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Ranking", "100"),
                ("Reputation", "50"),
                ("Contribution Points", "10"),
            ]
        );
    }

    #[test]
    fn solved_distribution_segments_follow_tier_order() {
        let ChartConfig::Donut(chart) = solved_distribution_chart(&alice()) else {
            panic!("solved distribution must be a donut");
        };
        assert_eq!(chart.series, vec![30, 20, 5]);
        assert_eq!(chart.labels, vec!["Easy", "Medium", "Hard"]);
        assert_eq!(
            chart.center_total,
            Some(CenterTotal {
                label: "Total Solved".into(),
                value: 55
            })
        );
        assert_eq!(chart.colors[0], Rgb(0x4a, 0xde, 0x80));
    }

    #[test]
    fn total_available_is_a_pie_of_denominators() {
        let ChartConfig::Pie(chart) = total_available_chart(&alice()) else {
            panic!("total available must be a pie");
        };
        assert_eq!(chart.series, vec![600, 1300, 600]);
        assert_eq!(chart.center_total, None);
        assert_eq!(chart.legend, LegendPosition::Bottom);
    }

    #[test]
    fn progress_axis_is_solved_share_in_percent() {
        let mut stats = alice();
        stats.easy_solved = 50;
        stats.total_easy = 200;
        let ChartConfig::Radar(chart) = progress_chart(&stats) else {
            panic!("progress must be a radar");
        };
        assert_close(chart.values[0], 25.0);
        assert_eq!(chart.axis_format.format(chart.values[0]), "25%");
    }

    #[test]
    fn progress_values_for_reference_profile() {
        let ChartConfig::Radar(chart) = progress_chart(&alice()) else {
            panic!("progress must be a radar");
        };
        assert_close(chart.values[0], 5.0);
        assert_close(chart.values[1], 100.0 * 20.0 / 1300.0);
        assert_close(chart.values[2], 100.0 * 5.0 / 600.0);
        assert!((chart.values[1] - 1.538).abs() < 1e-3);
        assert!((chart.values[2] - 0.833).abs() < 1e-3);
    }

    #[test]
    fn comparison_has_solved_and_total_series() {
        let ChartConfig::Bar(chart) = comparison_chart(&alice()) else {
            panic!("comparison must be a bar chart");
        };
        assert_eq!(chart.categories, vec!["Easy", "Medium", "Hard"]);
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Solved", "Total"]);
        assert!(chart.series.iter().all(|series| series.data.len() == 3));
        assert_eq!(chart.series[0].data, vec![30, 20, 5]);
        assert_eq!(chart.series[1].data, vec![600, 1300, 600]);
        assert!(chart.stacked);
    }

    #[test]
    fn dashboard_is_pure() {
        assert_eq!(build_dashboard(&alice()), build_dashboard(&alice()));
    }

    #[test]
    fn renderer_issues_five_calls_and_reuses_instances() {
        let port = RecordingPort::new();
        let mut renderer = ChartRenderer::new();

        renderer.render(&alice(), &port);
        let first = port.calls();
        renderer.render(&alice(), &port);
        let all = port.calls();

        assert_eq!(first.len(), 5);
        assert!(matches!(first[0], UiCall::Summary(_)));
        assert_eq!(&all[..5], &all[5..]);
        assert_eq!(renderer.registry.len(), 4);
        assert_eq!(port.count(|call| matches!(call, UiCall::Destroy(_))), 0);
    }

    #[test]
    fn dashboard_serializes_with_chart_type_tags() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(build_dashboard(&alice()))?;
        assert_eq!(json["charts"][0][0], "solved_distribution");
        assert_eq!(json["charts"][0][1]["type"], "donut");
        assert_eq!(json["charts"][2][1]["color"], "#8b5cf6");
        assert_eq!(json["summary"][2]["label"], "Contribution Points");
        Ok(())
    }
}
