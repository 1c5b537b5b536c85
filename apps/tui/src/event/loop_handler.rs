use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use judge_stats_core::{ChartConfig, RequestController, StatsSource, SubmitOutcome};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::app::{handle_key, App, ChannelPort, InputAction, SnapshotPort, UiCommand};
use crate::ui;

// Event poll timeout (ms), also the animation frame interval.
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Fetches once without a terminal and prints the result.
pub async fn run_headless<S: StatsSource>(
    controller: &RequestController<S>,
    username: &str,
    json: bool,
) -> Result<()> {
    let port = SnapshotPort::new();

    let outcome = controller
        .submit(username, &port)
        .await
        .map_err(|e| eyre!("{e}"))?;

    let snapshot = port.snapshot();
    match outcome {
        SubmitOutcome::Rendered => {}
        SubmitOutcome::Failed(error) => return Err(eyre!("Could not load statistics: {error}")),
        SubmitOutcome::Superseded => return Err(eyre!("request was superseded")),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("\nStatistics for {}", username.trim());
    println!("=================");
    for tile in &snapshot.summary {
        println!("{}: {}", tile.label, tile.value);
    }
    for (target, config) in &snapshot.charts {
        println!("\n{}:", target.title());
        for line in chart_lines(config) {
            println!("- {line}");
        }
    }

    Ok(())
}

fn chart_lines(config: &ChartConfig) -> Vec<String> {
    match config {
        ChartConfig::Donut(chart) | ChartConfig::Pie(chart) => chart
            .labels
            .iter()
            .zip(&chart.series)
            .zip(chart.shares())
            .map(|((label, value), share)| format!("{label}: {value} ({share:.1}%)"))
            .collect(),
        ChartConfig::Radar(chart) => chart
            .categories
            .iter()
            .zip(&chart.values)
            .map(|(category, value)| format!("{category}: {value:.2}%"))
            .collect(),
        ChartConfig::Bar(chart) => chart
            .categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let values = chart
                    .series
                    .iter()
                    .map(|series| {
                        let value = series.data.get(index).copied().unwrap_or(0);
                        format!("{} {}", series.name, chart.tooltip(value))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{category}: {values}")
            })
            .collect(),
    }
}

fn drain(rx: &mut UnboundedReceiver<UiCommand>, app: &mut App) {
    while let Ok(command) = rx.try_recv() {
        app.apply(command);
    }
}

/// Destroys every mounted chart and applies the resulting commands.
fn shutdown<S: StatsSource>(
    controller: &RequestController<S>,
    port: &ChannelPort,
    rx: &mut UnboundedReceiver<UiCommand>,
    app: &mut App,
) {
    controller.teardown(port);
    drain(rx, app);
    tracing::debug!(charts = app.charts.len(), "dashboard torn down");
}

fn spawn_submit<S>(controller: &Arc<RequestController<S>>, port: &ChannelPort, username: String)
where
    S: StatsSource + Send + Sync + 'static,
{
    let controller = Arc::clone(controller);
    let port = port.clone();
    tokio::spawn(async move {
        match controller.submit(&username, &port).await {
            Ok(outcome) => tracing::debug!(?outcome, "submit finished"),
            Err(e) => tracing::debug!("submit rejected: {e}"),
        }
    });
}

/// Runs the dashboard until the user quits.
pub async fn run<S>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    controller: Arc<RequestController<S>>,
    initial_username: Option<String>,
) -> Result<()>
where
    S: StatsSource + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let port = ChannelPort::new(tx);

    if let Some(username) = initial_username {
        app.username_input.clone_from(&username);
        spawn_submit(&controller, &port, username);
    }

    while app.running {
        drain(&mut rx, app);
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let InputAction::Submit(username) = handle_key(app, key) {
                        spawn_submit(&controller, &port, username);
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        tracing::debug!("redraw after resize failed");
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        // Let spawned submits make progress between frames.
        tokio::task::yield_now().await;
    }

    shutdown(&controller, &port, &mut rx, app);
    Ok(())
}
