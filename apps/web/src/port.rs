use judge_stats_core::{ChartConfig, ChartTarget, FetchError, SummaryTile, UiPort};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::animation::Spinner;

/// Everything the page draws. Written by [`WebPort`], read by the draw
/// callback; both run on the browser's single thread.
#[derive(Debug, Default)]
pub struct WebState {
    pub username_input: String,
    pub in_flight: usize,
    pub results_visible: bool,
    pub summary: Vec<SummaryTile>,
    pub charts: BTreeMap<ChartTarget, ChartConfig>,
    pub failure: Option<String>,
    pub spinner: Spinner,
}

impl WebState {
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// Something able to show a blocking message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert`, with the message echoed to the console.
#[derive(Debug, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        web_sys::console::warn_1(&message.into());
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                web_sys::console::error_1(&"window.alert is unavailable".into());
            }
        }
    }
}

#[derive(Clone)]
pub struct WebPort<N> {
    state: Rc<RefCell<WebState>>,
    notifier: Rc<N>,
}

impl<N: Notifier> WebPort<N> {
    pub fn new(state: Rc<RefCell<WebState>>, notifier: N) -> Self {
        Self {
            state,
            notifier: Rc::new(notifier),
        }
    }
}

impl<N: Notifier> UiPort for WebPort<N> {
    fn show_loading(&self) {
        self.state.borrow_mut().in_flight += 1;
    }

    fn hide_loading(&self) {
        let mut state = self.state.borrow_mut();
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    fn show_results(&self) {
        let mut state = self.state.borrow_mut();
        state.results_visible = true;
        state.failure = None;
    }

    fn hide_results(&self) {
        self.state.borrow_mut().results_visible = false;
    }

    fn render_summary(&self, tiles: &[SummaryTile]) {
        self.state.borrow_mut().summary = tiles.to_vec();
    }

    fn render_chart(&self, target: ChartTarget, config: &ChartConfig) {
        self.state.borrow_mut().charts.insert(target, config.clone());
    }

    fn destroy_chart(&self, target: ChartTarget) {
        self.state.borrow_mut().charts.remove(&target);
    }

    fn alert(&self, message: &str) {
        self.notifier.notify(message);
    }

    fn clear_input(&self) {
        self.state.borrow_mut().username_input.clear();
    }

    fn report_failure(&self, error: &FetchError) {
        self.state.borrow_mut().failure = Some(error.to_string());
    }
}
