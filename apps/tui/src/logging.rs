use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where diagnostics go. The dashboard owns the terminal, so it logs to a
/// file; headless runs log to stderr.
#[derive(Debug, Clone)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

pub fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug {
            "judge_stats_tui=debug,judge_stats_core=debug"
        } else {
            "judge_stats_tui=info,judge_stats_core=info"
        })
    })
}

pub fn init_logging(target: &LogTarget, debug: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(default_filter(debug))
        .with_target(true);

    let installed = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| eyre!("Failed to install logger: {e}"))
}
