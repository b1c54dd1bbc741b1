use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Gateway base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid gateway timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),

    #[error("Invalid poll_interval_ms: {0}. Must be at least 1")]
    InvalidPollInterval(u64),

    #[error("Invalid max_poll_attempts: {0}. Must be at least 1")]
    InvalidMaxPollAttempts(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. driftwatch.yaml in the working directory
    /// 3. Environment variables (DRIFTWATCH_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("driftwatch.yaml"))
            .merge(Env::prefixed("DRIFTWATCH_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if config.gateway.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.gateway.timeout_secs));
        }
        if config.detection.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidPollInterval(
                config.detection.poll_interval_ms,
            ));
        }
        if config.detection.max_poll_attempts == 0 {
            return Err(ConfigError::InvalidMaxPollAttempts(
                config.detection.max_poll_attempts,
            ));
        }
        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_carry_the_contract_poll_settings() {
        let config = Config::default();
        assert_eq!(config.detection.poll_interval_ms, 1000);
        assert_eq!(config.detection.max_poll_attempts, 60);
        assert!(config.metric_namespace.is_none());
        assert!(config.stack_names.is_none());
    }

    #[test]
    fn loads_yaml_over_defaults() {
        let file = write_config(
            r"
metric_namespace: Acme/Drift
stack_names:
  - app
  - network
gateway:
  base_url: https://control-plane.internal
detection:
  max_poll_attempts: 30
",
        );
        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.metric_namespace.as_deref(), Some("Acme/Drift"));
        assert_eq!(
            config.stack_names,
            Some(vec!["app".to_string(), "network".to_string()])
        );
        assert_eq!(config.gateway.base_url, "https://control-plane.internal");
        assert_eq!(config.detection.max_poll_attempts, 30);
        // Untouched sections keep their defaults.
        assert_eq!(config.detection.poll_interval_ms, 1000);
    }

    #[test]
    fn env_vars_override_file_values() {
        let file = write_config("metric_namespace: FromFile\n");
        temp_env::with_var("DRIFTWATCH_METRIC_NAMESPACE", Some("FromEnv"), || {
            let config: Config = Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Yaml::file(file.path()))
                .merge(Env::prefixed("DRIFTWATCH_").split("__"))
                .extract()
                .unwrap();
            assert_eq!(config.metric_namespace.as_deref(), Some("FromEnv"));
        });
    }

    #[test]
    fn nested_env_vars_use_double_underscore() {
        temp_env::with_var(
            "DRIFTWATCH_GATEWAY__BASE_URL",
            Some("https://env.example"),
            || {
                let config: Config = Figment::new()
                    .merge(Serialized::defaults(Config::default()))
                    .merge(Env::prefixed("DRIFTWATCH_").split("__"))
                    .extract()
                    .unwrap();
                assert_eq!(config.gateway.base_url, "https://env.example");
            },
        );
    }

    #[test]
    fn zero_poll_attempts_is_rejected() {
        let file = write_config("detection:\n  max_poll_attempts: 0\n");
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("max_poll_attempts"));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let file = write_config("logging:\n  format: xml\n");
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("log format"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let file = write_config("gateway:\n  base_url: \"\"\n");
        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }
}
