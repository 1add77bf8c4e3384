//! Configuration types.

use console_common_log::{LogConfig, LogFormat, LogLevel};
use console_common_secret::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration, as read from `console.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Admin service the console talks to.
    pub admin: AdminSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Upper bound on the time spent serving one request.
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
            request_timeout_secs: 30,
        }
    }
}

impl ServerSettings {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Admin service connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Base URL of the admin endpoint.
    pub endpoint: String,
    /// Access key of the admin account.
    pub access_key: String,
    /// Secret key of the admin account. Never written back out, so a saved
    /// file has to get it from `${CONSOLE_SECRET_KEY}` again.
    #[serde(skip_serializing)]
    pub secret_key: SecretString,
    /// Deadline for a single site replication call.
    pub timeout_secs: u64,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9000".to_string(),
            access_key: String::new(),
            secret_key: SecretString::default(),
            timeout_secs: 10,
        }
    }
}

impl AdminSettings {
    /// Deadline for a single site replication call.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Also append log lines to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl From<&LoggingSettings> for LogConfig {
    fn from(settings: &LoggingSettings) -> Self {
        LogConfig {
            level: settings.level,
            format: settings.format,
            file_path: settings.file_path.clone(),
            ..LogConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let server = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 9443,
            ..ServerSettings::default()
        };
        assert_eq!(server.bind_addr(), "127.0.0.1:9443");
    }

    #[test]
    fn test_timeouts() {
        let config = ConsoleConfig::default();
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.admin.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_logging_settings_into_log_config() {
        let settings = LoggingSettings {
            level: LogLevel::Warn,
            format: LogFormat::Json,
            file_path: Some(PathBuf::from("/var/log/console.log")),
        };
        let log_config = LogConfig::from(&settings);

        assert_eq!(log_config.level, LogLevel::Warn);
        assert_eq!(log_config.format, LogFormat::Json);
        assert_eq!(log_config.file_path, settings.file_path);
        assert!(!log_config.span_events);
    }

    #[test]
    fn test_admin_settings_debug_hides_secret() {
        let admin = AdminSettings {
            access_key: "admin".to_string(),
            secret_key: "minio123".into(),
            ..AdminSettings::default()
        };
        let rendered = format!("{:?}", admin);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("minio123"));
    }
}
