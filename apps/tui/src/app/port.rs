use judge_stats_core::{ChartConfig, ChartTarget, FetchError, SummaryTile, UiPort};
use std::collections::BTreeMap;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

/// A UI Port call, queued for the event loop to apply to [`super::App`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    ShowLoading,
    HideLoading,
    ShowResults,
    HideResults,
    Summary(Vec<SummaryTile>),
    Chart(ChartTarget, ChartConfig),
    DestroyChart(ChartTarget),
    Alert(String),
    ClearInput,
    Failure(String),
}

/// Port handed to submit tasks. Calls become [`UiCommand`]s so only the
/// event loop ever touches the app state.
#[derive(Debug, Clone)]
pub struct ChannelPort {
    tx: UnboundedSender<UiCommand>,
}

impl ChannelPort {
    pub const fn new(tx: UnboundedSender<UiCommand>) -> Self {
        Self { tx }
    }

    fn send(&self, command: UiCommand) {
        if self.tx.send(command).is_err() {
            // Event loop already gone; the app is shutting down.
            tracing::trace!("dropping ui command after shutdown");
        }
    }
}

impl UiPort for ChannelPort {
    fn show_loading(&self) {
        self.send(UiCommand::ShowLoading);
    }

    fn hide_loading(&self) {
        self.send(UiCommand::HideLoading);
    }

    fn show_results(&self) {
        self.send(UiCommand::ShowResults);
    }

    fn hide_results(&self) {
        self.send(UiCommand::HideResults);
    }

    fn render_summary(&self, tiles: &[SummaryTile]) {
        self.send(UiCommand::Summary(tiles.to_vec()));
    }

    fn render_chart(&self, target: ChartTarget, config: &ChartConfig) {
        self.send(UiCommand::Chart(target, config.clone()));
    }

    fn destroy_chart(&self, target: ChartTarget) {
        self.send(UiCommand::DestroyChart(target));
    }

    fn alert(&self, message: &str) {
        self.send(UiCommand::Alert(message.to_string()));
    }

    fn clear_input(&self) {
        self.send(UiCommand::ClearInput);
    }

    fn report_failure(&self, error: &FetchError) {
        self.send(UiCommand::Failure(error.to_string()));
    }
}

/// What a headless run collected from one submit.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct Snapshot {
    pub summary: Vec<SummaryTile>,
    pub charts: BTreeMap<ChartTarget, ChartConfig>,
    #[serde(skip)]
    pub alert: Option<String>,
    #[serde(skip)]
    pub failure: Option<String>,
}

/// Port for headless mode: keeps the last state of every region.
#[derive(Debug, Default)]
pub struct SnapshotPort {
    snapshot: Mutex<Snapshot>,
}

impl SnapshotPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
            .lock()
            .map(|snapshot| snapshot.clone())
            .unwrap_or_default()
    }

    fn update(&self, change: impl FnOnce(&mut Snapshot)) {
        if let Ok(mut snapshot) = self.snapshot.lock() {
            change(&mut snapshot);
        }
    }
}

impl UiPort for SnapshotPort {
    fn show_loading(&self) {}

    fn hide_loading(&self) {}

    fn show_results(&self) {}

    fn hide_results(&self) {}

    fn render_summary(&self, tiles: &[SummaryTile]) {
        self.update(|snapshot| snapshot.summary = tiles.to_vec());
    }

    fn render_chart(&self, target: ChartTarget, config: &ChartConfig) {
        self.update(|snapshot| {
            snapshot.charts.insert(target, config.clone());
        });
    }

    fn destroy_chart(&self, target: ChartTarget) {
        self.update(|snapshot| {
            snapshot.charts.remove(&target);
        });
    }

    fn alert(&self, message: &str) {
        self.update(|snapshot| snapshot.alert = Some(message.to_string()));
    }

    fn clear_input(&self) {}

    fn report_failure(&self, error: &FetchError) {
        self.update(|snapshot| snapshot.failure = Some(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use judge_stats_core::render::summary_tiles;
    use judge_stats_core::ProfileStatistics;
    use tokio::sync::mpsc;

    #[test]
    fn channel_port_forwards_calls_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let port = ChannelPort::new(tx);

        port.show_loading();
        port.alert("Enter a username to proceed");
        port.report_failure(&FetchError::Status(404));
        port.hide_loading();

        let mut received = Vec::new();
        while let Ok(command) = rx.try_recv() {
            received.push(command);
        }

        assert_eq!(
            received,
            vec![
                UiCommand::ShowLoading,
                UiCommand::Alert("Enter a username to proceed".to_string()),
                UiCommand::Failure("statistics API answered with HTTP 404".to_string()),
                UiCommand::HideLoading,
            ]
        );
    }

    #[test]
    fn channel_port_survives_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        ChannelPort::new(tx).clear_input();
    }

    #[test]
    fn snapshot_port_keeps_latest_region_state() {
        let stats = ProfileStatistics {
            ranking: 7,
            reputation: 1,
            contribution_points: 2,
            easy_solved: 1,
            medium_solved: 1,
            hard_solved: 1,
            total_easy: 2,
            total_medium: 2,
            total_hard: 2,
        };
        let port = SnapshotPort::new();
        let mut renderer = judge_stats_core::ChartRenderer::new();

        renderer.render(&stats, &port);
        assert_eq!(port.snapshot().summary, summary_tiles(&stats));
        assert_eq!(port.snapshot().charts.len(), 4);

        renderer.teardown(&port);
        assert!(port.snapshot().charts.is_empty());
    }
}
