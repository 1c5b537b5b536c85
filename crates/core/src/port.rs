use crate::chart::{ChartConfig, ChartTarget};
use crate::error::FetchError;
use serde::Serialize;

/// One label/value tile of the summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTile {
    pub label: String,
    pub value: String,
}

impl SummaryTile {
    pub fn new(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Boundary between the request pipeline and whatever presents it.
///
/// Methods take `&self` so a single port can be shared by overlapping
/// submits; implementations use interior mutability or message passing.
pub trait UiPort {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn show_results(&self);
    fn hide_results(&self);

    /// Replaces every tile of the summary region.
    fn render_summary(&self, tiles: &[SummaryTile]);

    /// Draws `config` into `target`, replacing what is there.
    fn render_chart(&self, target: ChartTarget, config: &ChartConfig);

    /// Releases the chart instance currently mounted on `target`.
    fn destroy_chart(&self, target: ChartTarget);

    /// Blocking user-facing notice for input errors.
    fn alert(&self, message: &str);

    fn clear_input(&self);

    /// Fetch failures are logged by the controller; ports may also surface them.
    fn report_failure(&self, _error: &FetchError) {}
}

impl<P: UiPort + ?Sized> UiPort for &P {
    fn show_loading(&self) {
        (**self).show_loading();
    }

    fn hide_loading(&self) {
        (**self).hide_loading();
    }

    fn show_results(&self) {
        (**self).show_results();
    }

    fn hide_results(&self) {
        (**self).hide_results();
    }

    fn render_summary(&self, tiles: &[SummaryTile]) {
        (**self).render_summary(tiles);
    }

    fn render_chart(&self, target: ChartTarget, config: &ChartConfig) {
        (**self).render_chart(target, config);
    }

    fn destroy_chart(&self, target: ChartTarget) {
        (**self).destroy_chart(target);
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn clear_input(&self) {
        (**self).clear_input();
    }

    fn report_failure(&self, error: &FetchError) {
        (**self).report_failure(error);
    }
}

/// Port that records every call, for tests of code driving a [`UiPort`].
#[cfg(any(test, feature = "test-util"))]
pub mod recording {
    use super::{SummaryTile, UiPort};
    use crate::chart::{ChartConfig, ChartTarget};
    use crate::error::FetchError;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum UiCall {
        ShowLoading,
        HideLoading,
        ShowResults,
        HideResults,
        Summary(Vec<SummaryTile>),
        Chart(ChartTarget, ChartConfig),
        Destroy(ChartTarget),
        Alert(String),
        ClearInput,
        Failure(FetchError),
    }

    #[derive(Debug, Default)]
    pub struct RecordingPort {
        calls: Mutex<Vec<UiCall>>,
    }

    impl RecordingPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<UiCall> {
            self.calls
                .lock()
                .map(|calls| calls.clone())
                .unwrap_or_default()
        }

        pub fn count(&self, predicate: impl Fn(&UiCall) -> bool) -> usize {
            self.calls().iter().filter(|call| predicate(call)).count()
        }

        pub fn charts(&self) -> Vec<(ChartTarget, ChartConfig)> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    UiCall::Chart(target, config) => Some((target, config)),
                    _ => None,
                })
                .collect()
        }

        fn push(&self, call: UiCall) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }
    }

    impl UiPort for RecordingPort {
        fn show_loading(&self) {
            self.push(UiCall::ShowLoading);
        }

        fn hide_loading(&self) {
            self.push(UiCall::HideLoading);
        }

        fn show_results(&self) {
            self.push(UiCall::ShowResults);
        }

        fn hide_results(&self) {
            self.push(UiCall::HideResults);
        }

        fn render_summary(&self, tiles: &[SummaryTile]) {
            self.push(UiCall::Summary(tiles.to_vec()));
        }

        fn render_chart(&self, target: ChartTarget, config: &ChartConfig) {
            self.push(UiCall::Chart(target, config.clone()));
        }

        fn destroy_chart(&self, target: ChartTarget) {
            self.push(UiCall::Destroy(target));
        }

        fn alert(&self, message: &str) {
            self.push(UiCall::Alert(message.to_string()));
        }

        fn clear_input(&self) {
            self.push(UiCall::ClearInput);
        }

        fn report_failure(&self, error: &FetchError) {
            self.push(UiCall::Failure(error.clone()));
        }
    }
}
