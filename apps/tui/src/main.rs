use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use judge_stats_core::RequestController;
use judge_stats_tui::api::HttpStatsSource;
use judge_stats_tui::app::App;
use judge_stats_tui::cli::CliArgs;
use judge_stats_tui::config::init_app_config;
use judge_stats_tui::logging::{init_logging, LogTarget};
use judge_stats_tui::{event, terminal};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    let headless = args.headless || !is_terminal();
    let log_target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_file.clone())
    };
    init_logging(&log_target, config.debug)?;

    tracing::info!(
        endpoint = %config.endpoint,
        policy = %config.policy,
        headless,
        "starting judge-stats"
    );

    let source = HttpStatsSource::new()?;
    let controller = Arc::new(RequestController::new(
        source,
        config.endpoint.clone(),
        config.policy,
    ));

    if headless {
        let username = args
            .username
            .as_deref()
            .ok_or_else(|| eyre!("--username is required without a terminal"))?;
        return event::run_headless(controller.as_ref(), username, args.json).await;
    }

    let mut app = App::new(&config);
    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app, controller, args.username).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
