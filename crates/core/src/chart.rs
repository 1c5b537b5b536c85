//! Declarative chart configuration handed to a drawing engine.
//!
//! Nothing here knows how to draw. Front ends translate these values into
//! their own widgets, so every field is plain data.

use serde::{Serialize, Serializer};
use std::fmt;

/// Addressable region a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartTarget {
    SolvedDistribution,
    TotalAvailable,
    Progress,
    Comparison,
}

impl ChartTarget {
    pub const ALL: [Self; 4] = [
        Self::SolvedDistribution,
        Self::TotalAvailable,
        Self::Progress,
        Self::Comparison,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::SolvedDistribution => "Solved Problems",
            Self::TotalAvailable => "Total Problems",
            Self::Progress => "Progress",
            Self::Comparison => "Solved vs Total",
        }
    }

    /// DOM id of the region this chart is mounted in.
    pub const fn region_id(self) -> &'static str {
        match self {
            Self::SolvedDistribution => "solvedChart",
            Self::TotalAvailable => "totalChart",
            Self::Progress => "progressChart",
            Self::Comparison => "comparisonChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Donut,
    Pie,
    Radar,
    Bar,
}

/// Label shown in the hole of a donut, with the sum of all segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterTotal {
    pub label: String,
    pub value: u64,
}

/// Donut and pie charts: one segment per label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProportionChart {
    pub labels: Vec<String>,
    pub series: Vec<u64>,
    pub colors: Vec<Rgb>,
    pub center_total: Option<CenterTotal>,
    pub data_labels: bool,
    pub legend: LegendPosition,
    pub height: u16,
}

impl ProportionChart {
    pub fn total(&self) -> u64 {
        self.series.iter().sum()
    }

    /// Share of each segment in percent; all zeros when the chart is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.series
            .iter()
            .map(|value| {
                if total == 0 {
                    0.0
                } else {
                    *value as f64 / total as f64 * 100.0
                }
            })
            .collect()
    }
}

/// Axis label formatting for percentage axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PercentFormat {
    pub decimals: usize,
}

impl PercentFormat {
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}%", prec = self.decimals)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub series_name: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color: Rgb,
    pub fill_opacity: f32,
    pub marker_size: u16,
    pub axis_format: PercentFormat,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub colors: Vec<Rgb>,
    pub stacked: bool,
    pub column_width_percent: u8,
    pub y_axis_title: String,
    pub tooltip_suffix: String,
    pub legend: LegendPosition,
    pub height: u16,
}

impl BarChart {
    pub fn tooltip(&self, value: u64) -> String {
        format!("{value}{}", self.tooltip_suffix)
    }

    /// Height of the tallest column, summing series when stacked.
    pub fn max_column(&self) -> u64 {
        (0..self.categories.len())
            .map(|index| {
                let values = self.series.iter().filter_map(|series| series.data.get(index));
                if self.stacked {
                    values.sum()
                } else {
                    values.copied().max().unwrap_or(0)
                }
            })
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartConfig {
    Donut(ProportionChart),
    Pie(ProportionChart),
    Radar(RadarChart),
    Bar(BarChart),
}

impl ChartConfig {
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Donut(_) => ChartKind::Donut,
            Self::Pie(_) => ChartKind::Pie,
            Self::Radar(_) => ChartKind::Radar,
            Self::Bar(_) => ChartKind::Bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb(0x4a, 0xde, 0x80).to_string(), "#4ade80");
        assert_eq!(Rgb(0x8b, 0x5c, 0xf6).to_string(), "#8b5cf6");
    }

    #[test]
    fn percent_format_rounds_to_requested_precision() {
        let format = PercentFormat { decimals: 0 };
        assert_eq!(format.format(25.0), "25%");
        assert_eq!(format.format(1.538), "2%");
    }

    #[test]
    fn stacked_columns_sum_series() {
        let chart = BarChart {
            categories: vec!["Easy".into(), "Medium".into()],
            series: vec![
                BarSeries {
                    name: "Solved".into(),
                    data: vec![3, 9],
                },
                BarSeries {
                    name: "Total".into(),
                    data: vec![10, 4],
                },
            ],
            colors: Vec::new(),
            stacked: true,
            column_width_percent: 55,
            y_axis_title: String::new(),
            tooltip_suffix: " questions".into(),
            legend: LegendPosition::Top,
            height: 350,
        };

        assert_eq!(chart.max_column(), 13);
        assert_eq!(chart.tooltip(4), "4 questions");

        let grouped = BarChart {
            stacked: false,
            ..chart
        };
        assert_eq!(grouped.max_column(), 10);
    }

    #[test]
    fn empty_proportion_chart_has_zero_shares() {
        let chart = ProportionChart {
            labels: vec!["Easy".into()],
            series: vec![0],
            colors: Vec::new(),
            center_total: None,
            data_labels: true,
            legend: LegendPosition::Bottom,
            height: 350,
        };
        assert_eq!(chart.shares(), vec![0.0]);
    }
}
