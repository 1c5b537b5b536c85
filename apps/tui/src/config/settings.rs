use dotenv::dotenv;
use judge_stats_core::{EndpointTemplate, RequestPolicy, UnknownPolicy, DEFAULT_ENDPOINT};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const ENDPOINT_VAR: &str = "STATS_ENDPOINT";
pub const POLICY_VAR: &str = "REQUEST_POLICY";
pub const LOG_FILE_VAR: &str = "LOG_FILE";
pub const DEBUG_VAR: &str = "DEBUG";

const DEFAULT_LOG_FILE: &str = "judge-stats.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid REQUEST_POLICY: {0}")]
    Policy(#[from] UnknownPolicy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: EndpointTemplate,
    pub policy: RequestPolicy,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Builds the configuration from a variable lookup, so tests need not
    /// touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || EndpointTemplate::new(DEFAULT_ENDPOINT),
                |value| EndpointTemplate::new(&value),
            );

        let policy = match lookup(POLICY_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse::<RequestPolicy>()?,
            _ => RequestPolicy::default(),
        };

        let log_file = lookup(LOG_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        let debug = lookup(DEBUG_VAR).is_some_and(|value| value != "0" && !value.is_empty());

        Ok(Self {
            endpoint,
            policy,
            log_file,
            debug,
        })
    }
}

/// Loads `.env` and reads the configuration from the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup(&[]))?;

        assert_eq!(
            config,
            AppConfig {
                endpoint: EndpointTemplate::default(),
                policy: RequestPolicy::Concurrent,
                log_file: PathBuf::from("judge-stats.log"),
                debug: false,
            }
        );
        Ok(())
    }

    #[test]
    fn environment_overrides_each_setting() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "http://localhost:4010"),
            (POLICY_VAR, "latest"),
            (LOG_FILE_VAR, "/tmp/stats.log"),
            (DEBUG_VAR, "1"),
        ]))?;

        assert_eq!(config.endpoint.url_for("alice"), "http://localhost:4010/alice");
        assert_eq!(config.policy, RequestPolicy::LatestOnly);
        assert_eq!(config.log_file, PathBuf::from("/tmp/stats.log"));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[(POLICY_VAR, "yolo")]));
        assert!(matches!(result, Err(ConfigError::Policy(_))));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "  "),
            (POLICY_VAR, ""),
            (DEBUG_VAR, "0"),
        ]))?;

        assert_eq!(config.endpoint, EndpointTemplate::default());
        assert_eq!(config.policy, RequestPolicy::Concurrent);
        assert!(!config.debug);
        Ok(())
    }
}
