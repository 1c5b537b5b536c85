mod settings;

pub use settings::{
    init_app_config, AppConfig, ConfigError, DEBUG_VAR, ENDPOINT_VAR, LOG_FILE_VAR, POLICY_VAR,
};
