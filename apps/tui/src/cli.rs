use crate::config::{DEBUG_VAR, ENDPOINT_VAR, LOG_FILE_VAR, POLICY_VAR};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "judge-stats", version, about = "Coding-judge profile statistics dashboard")]
pub struct CliArgs {
    /// Fetch this user's statistics on start-up
    #[arg(short, long, value_name = "NAME")]
    pub username: Option<String>,

    /// Fetch once, print the statistics and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON chart configuration
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the statistics endpoint template (`{username}` is substituted)
    #[arg(long, value_name = "TEMPLATE")]
    pub endpoint: Option<String>,

    /// How overlapping submits are handled: concurrent, serialize or latest
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<String>,

    /// Override the log file used while the dashboard is open
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(endpoint) = &self.endpoint {
            std::env::set_var(ENDPOINT_VAR, endpoint);
        }
        if let Some(policy) = &self.policy {
            std::env::set_var(POLICY_VAR, policy);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var(LOG_FILE_VAR, path);
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parses_headless_invocation() {
        let args = CliArgs::parse_from([
            "judge-stats",
            "--username",
            "alice",
            "--headless",
            "--json",
            "--policy",
            "serialize",
        ]);

        assert_eq!(args.username.as_deref(), Some("alice"));
        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.policy.as_deref(), Some("serialize"));
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn help_mentions_every_flag() {
        let help = CliArgs::command().render_help().to_string();
        for flag in ["--username", "--headless", "--json", "--endpoint", "--policy", "--log-file"] {
            assert!(help.contains(flag), "missing {flag} in help");
        }
    }
}
