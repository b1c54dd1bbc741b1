use serde::{Deserialize, Serialize};

/// Main configuration structure for driftwatch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Namespace the drifted-stacks metric is published under.
    /// Required at run time; absent here means it must come from the CLI.
    #[serde(default)]
    pub metric_namespace: Option<String>,

    /// Stack names to check. Unset or empty means every stack in inventory.
    #[serde(default)]
    pub stack_names: Option<Vec<String>>,

    /// Control-plane gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Drift detection polling configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Control-plane gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GatewayConfig {
    /// Base URL of the inventory/drift control-plane API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional bearer token for the gateway
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_token: None,
        }
    }
}

/// Drift detection polling configuration
///
/// Defaults are the contract values: one poll per second, sixty polls,
/// bounding each stack's detection at roughly one minute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DetectionConfig {
    /// Milliseconds to sleep between status polls
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum number of status polls per stack before timing out
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
}

const fn default_poll_interval_ms() -> u64 {
    1000
}

const fn default_max_poll_attempts() -> u32 {
    60
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
