use crate::presentation::config::Environment;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    /// JSON output is an env toggle (`LOG_FORMAT=json`); the environment
    /// comes from the already-parsed settings.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}
