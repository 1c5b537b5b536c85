use crate::app::port::UiCommand;
use crate::config::AppConfig;
use chrono::{DateTime, Local};
use judge_stats_core::{ChartConfig, ChartTarget, RequestPolicy, SummaryTile};
use ratatui::style::Color;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;

const REVEAL_MILLIS: u32 = 600;

pub struct App {
    pub running: bool,
    pub username_input: String,
    /// Submits currently in flight. The indicator shows while this is non-zero.
    pub in_flight: usize,
    pub results_visible: bool,
    pub summary: Vec<SummaryTile>,
    pub charts: BTreeMap<ChartTarget, ChartConfig>,
    pub alert: Option<String>,
    pub status_message: String,
    pub last_fetch: Option<DateTime<Local>>,
    pub endpoint: String,
    pub policy: RequestPolicy,
    pub throbber: ThrobberState,
    pub reveal_fx: Mutex<Option<Effect>>,
    pub last_tick: Duration,
    pub last_frame: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            running: true,
            username_input: String::new(),
            in_flight: 0,
            results_visible: false,
            summary: Vec::new(),
            charts: BTreeMap::new(),
            alert: None,
            status_message: String::new(),
            last_fetch: None,
            endpoint: config.endpoint.to_string(),
            policy: config.policy,
            throbber: ThrobberState::default(),
            reveal_fx: Mutex::new(None),
            last_tick: Duration::ZERO,
            last_frame: Instant::now(),
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_tick = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.is_loading() {
            self.throbber.calc_next();
        }
    }

    pub fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::ShowLoading => {
                self.in_flight += 1;
                self.status_message = "Fetching statistics...".to_string();
            }
            UiCommand::HideLoading => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.in_flight == 0 && self.status_message == "Fetching statistics..." {
                    self.status_message.clear();
                }
            }
            UiCommand::ShowResults => {
                self.results_visible = true;
                self.last_fetch = Some(Local::now());
                self.status_message = "Statistics updated".to_string();
                self.start_reveal();
            }
            UiCommand::HideResults => {
                self.results_visible = false;
            }
            UiCommand::Summary(tiles) => {
                self.summary = tiles;
            }
            UiCommand::Chart(target, config) => {
                self.charts.insert(target, config);
            }
            UiCommand::DestroyChart(target) => {
                self.charts.remove(&target);
            }
            UiCommand::Alert(message) => {
                self.alert = Some(message);
            }
            UiCommand::ClearInput => {
                self.username_input.clear();
            }
            UiCommand::Failure(message) => {
                self.status_message = format!("Could not load statistics: {message}");
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn start_reveal(&self) {
        if let Ok(mut effect) = self.reveal_fx.lock() {
            *effect = Some(fx::fade_from_fg(
                Color::Black,
                (REVEAL_MILLIS, Interpolation::QuadOut),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use judge_stats_core::render::build_chart;
    use judge_stats_core::ProfileStatistics;

    fn new_app() -> Result<App, crate::config::ConfigError> {
        let config = AppConfig::from_lookup(|_| None)?;
        Ok(App::new(&config))
    }

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

    #[test]
    fn loading_stays_visible_until_every_submit_completes() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;

        app.apply(UiCommand::ShowLoading);
        app.apply(UiCommand::ShowLoading);
        app.apply(UiCommand::HideLoading);
        assert!(app.is_loading());

        app.apply(UiCommand::HideLoading);
        assert!(!app.is_loading());

        app.apply(UiCommand::HideLoading);
        assert_eq!(app.in_flight, 0);
        Ok(())
    }

    #[test]
    fn success_sequence_reveals_results_and_clears_input() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        app.username_input = "alice".to_string();

        app.apply(UiCommand::ShowLoading);
        app.apply(UiCommand::HideResults);
        app.apply(UiCommand::ShowResults);
        app.apply(UiCommand::Chart(
            ChartTarget::Progress,
            build_chart(ChartTarget::Progress, &stats()),
        ));
        app.apply(UiCommand::ClearInput);
        app.apply(UiCommand::HideLoading);

        assert!(app.results_visible);
        assert!(app.username_input.is_empty());
        assert!(app.last_fetch.is_some());
        assert_eq!(app.charts.len(), 1);
        assert_eq!(app.status_message, "Statistics updated");
        assert!(app.reveal_fx.lock().map(|fx| fx.is_some()).unwrap_or(false));
        Ok(())
    }

    #[test]
    fn failure_keeps_input_and_reports_status() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        app.username_input = "ghost".to_string();

        app.apply(UiCommand::ShowLoading);
        app.apply(UiCommand::HideResults);
        app.apply(UiCommand::Failure("statistics API answered with HTTP 404".into()));
        app.apply(UiCommand::HideLoading);

        assert!(!app.results_visible);
        assert_eq!(app.username_input, "ghost");
        assert!(app.status_message.contains("HTTP 404"));
        Ok(())
    }

    #[test]
    fn destroy_removes_mounted_chart() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        app.apply(UiCommand::Chart(
            ChartTarget::Comparison,
            build_chart(ChartTarget::Comparison, &stats()),
        ));
        app.apply(UiCommand::DestroyChart(ChartTarget::Comparison));
        assert!(app.charts.is_empty());
        Ok(())
    }

    #[test]
    fn alert_is_held_until_dismissed() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = new_app()?;
        app.apply(UiCommand::Alert("Enter a username to proceed".into()));
        assert_eq!(app.alert.as_deref(), Some("Enter a username to proceed"));
        app.dismiss_alert();
        assert!(app.alert.is_none());
        Ok(())
    }
}
