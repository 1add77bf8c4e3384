//! Configuration file loading and parsing.

use crate::types::ConsoleConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// File name looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "console.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

fn env_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env reference pattern is valid")
    })
}

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given config file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this loader reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load configuration, returning defaults when the file does not exist.
    pub fn load(&self) -> Result<ConsoleConfig, ConfigError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no config file found, using defaults");
            return Ok(ConsoleConfig::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let expanded = self.expand_env_vars(&contents)?;

        let config: ConsoleConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        tracing::info!(
            path = %self.path.display(),
            admin_endpoint = %config.admin.endpoint,
            "loaded console config"
        );
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    pub(crate) fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in env_ref_pattern().captures_iter(content) {
            let full_match = &cap[0];
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(full_match, &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    pub fn validate(&self, config: &ConsoleConfig) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if config.server.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "server.request_timeout_secs must be greater than 0".to_string(),
            });
        }

        if config.admin.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "admin.timeout_secs must be greater than 0".to_string(),
            });
        }

        if config.server.request_timeout_secs < config.admin.timeout_secs {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "server.request_timeout_secs ({}) must not be shorter than admin.timeout_secs ({})",
                    config.server.request_timeout_secs, config.admin.timeout_secs
                ),
            });
        }

        let endpoint = config.admin.endpoint.as_str();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("admin.endpoint must be an http(s) URL, got {:?}", endpoint),
            });
        }

        Ok(())
    }

    /// Save configuration to file. The admin secret key is left out.
    pub fn save(&self, config: &ConsoleConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(&self.path, yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let path = std::env::var(crate::env::vars::CONSOLE_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::new(path)
    }
}
