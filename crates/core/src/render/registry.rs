use crate::chart::{ChartConfig, ChartKind, ChartTarget};
use crate::port::UiPort;
use std::collections::BTreeMap;

/// What mounting a config on a target did to the previous instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Updated,
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartInstance {
    pub id: u64,
    pub kind: ChartKind,
}

/// Tracks the live chart instance of every target so repeated renders reuse
/// or dispose of the previous one instead of stacking new ones.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    live: BTreeMap<ChartTarget, ChartInstance>,
    next_id: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount<P: UiPort + ?Sized>(
        &mut self,
        port: &P,
        target: ChartTarget,
        config: &ChartConfig,
    ) -> Lifecycle {
        let kind = config.kind();
        let lifecycle = match self.live.get(&target) {
            None => Lifecycle::Created,
            Some(instance) if instance.kind == kind => Lifecycle::Updated,
            Some(_) => {
                port.destroy_chart(target);
                Lifecycle::Replaced
            }
        };

        port.render_chart(target, config);

        if lifecycle != Lifecycle::Updated {
            self.next_id += 1;
            self.live.insert(
                target,
                ChartInstance {
                    id: self.next_id,
                    kind,
                },
            );
        }

        tracing::trace!(region = target.region_id(), ?kind, ?lifecycle, "chart mounted");
        lifecycle
    }

    pub fn get(&self, target: ChartTarget) -> Option<ChartInstance> {
        self.live.get(&target).copied()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Destroys every live instance.
    pub fn teardown<P: UiPort + ?Sized>(&mut self, port: &P) {
        for target in std::mem::take(&mut self.live).into_keys() {
            port.destroy_chart(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{BarChart, LegendPosition, ProportionChart};
    use crate::port::recording::{RecordingPort, UiCall};

    fn pie() -> ChartConfig {
        ChartConfig::Pie(ProportionChart {
            labels: vec!["Easy".into()],
            series: vec![1],
            colors: Vec::new(),
            center_total: None,
            data_labels: true,
            legend: LegendPosition::Bottom,
            height: 350,
        })
    }

    fn bar() -> ChartConfig {
        ChartConfig::Bar(BarChart {
            categories: vec!["Easy".into()],
            series: Vec::new(),
            colors: Vec::new(),
            stacked: true,
            column_width_percent: 55,
            y_axis_title: String::new(),
            tooltip_suffix: String::new(),
            legend: LegendPosition::Top,
            height: 350,
        })
    }

    #[test]
    fn first_mount_creates_then_same_kind_updates_in_place() {
        let port = RecordingPort::new();
        let mut registry = ChartRegistry::new();

        let first = registry.mount(&port, ChartTarget::TotalAvailable, &pie());
        let id = registry.get(ChartTarget::TotalAvailable).map(|i| i.id);
        let second = registry.mount(&port, ChartTarget::TotalAvailable, &pie());

        assert_eq!(first, Lifecycle::Created);
        assert_eq!(second, Lifecycle::Updated);
        assert_eq!(registry.get(ChartTarget::TotalAvailable).map(|i| i.id), id);
        assert_eq!(port.count(|call| matches!(call, UiCall::Destroy(_))), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn kind_change_destroys_before_creating() {
        let port = RecordingPort::new();
        let mut registry = ChartRegistry::new();

        registry.mount(&port, ChartTarget::Comparison, &pie());
        let lifecycle = registry.mount(&port, ChartTarget::Comparison, &bar());

        assert_eq!(lifecycle, Lifecycle::Replaced);
        let calls = port.calls();
        assert!(matches!(calls[1], UiCall::Destroy(ChartTarget::Comparison)));
        assert!(matches!(calls[2], UiCall::Chart(ChartTarget::Comparison, _)));
        assert_eq!(
            registry.get(ChartTarget::Comparison).map(|i| (i.id, i.kind)),
            Some((2, ChartKind::Bar))
        );
    }

    #[test]
    fn teardown_destroys_every_live_chart() {
        let port = RecordingPort::new();
        let mut registry = ChartRegistry::new();
        registry.mount(&port, ChartTarget::TotalAvailable, &pie());
        registry.mount(&port, ChartTarget::Comparison, &bar());

        registry.teardown(&port);

        assert!(registry.is_empty());
        assert_eq!(port.count(|call| matches!(call, UiCall::Destroy(_))), 2);
    }
}
