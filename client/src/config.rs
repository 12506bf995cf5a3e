//! # Client Configuration
//!
//! Configuration loaded from environment variables, with defaults that match a
//! backend running locally.
//!
//! | Variable | Default |
//! |---|---|
//! | `COPMI_API_URL` | `http://localhost:5000/api` |
//! | `COPMI_HTTP_TIMEOUT_SECS` | unset (no timeout) |
//! | `COPMI_SESSION_FILE` | `<config dir>/copmi/session.json` |
//! | `COPMI_LOG_DIR` | unset (stderr only) |
//!
//! ```rust,no_run
//! use copmi_client::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), copmi_client::core::error::ConfigError>(())
//! ```

use crate::core::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL without a trailing slash
    pub api_url: String,

    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,

    /// Location of the persisted session; `None` uses the platform default
    pub session_file: Option<PathBuf>,

    /// Directory for rotated log files
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("COPMI_API_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = match env::var("COPMI_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        let session_file = env::var("COPMI_SESSION_FILE").ok().map(PathBuf::from);

        let log_dir = env::var("COPMI_LOG_DIR").ok().map(PathBuf::from);

        Ok(Self {
            api_url,
            request_timeout,
            session_file,
            log_dir,
        })
    }

    /// Override the API base URL (CLI flag).
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_base_url(api_url);
        self
    }

    /// Override the session file location (CLI flag).
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// The session file to use, falling back to `<config dir>/copmi/session.json`.
    ///
    /// The default is only looked up when nothing was configured.
    pub fn session_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.session_file {
            Some(path) => Ok(path.clone()),
            None => default_session_file(),
        }
    }

    /// Reject values that would only fail later, on the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                name: "COPMI_API_URL",
                value: self.api_url.clone(),
            });
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            name: "COPMI_HTTP_TIMEOUT_SECS",
            value: raw.to_string(),
        }),
    }
}

fn default_session_file() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("copmi").join("session.json"))
        .ok_or(ConfigError::NoSessionLocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "COPMI_API_URL",
        "COPMI_HTTP_TIMEOUT_SECS",
        "COPMI_SESSION_FILE",
        "COPMI_LOG_DIR",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("COPMI_SESSION_FILE", "/tmp/copmi-session.json");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.session_file().unwrap(), PathBuf::from("/tmp/copmi-session.json"));
        assert_eq!(config.log_dir, None);
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        clear_env();
        env::set_var("COPMI_API_URL", "https://copmi.example.org/api/");
        env::set_var("COPMI_HTTP_TIMEOUT_SECS", "15");
        env::set_var("COPMI_SESSION_FILE", "/tmp/s.json");
        env::set_var("COPMI_LOG_DIR", "/tmp/copmi-logs");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://copmi.example.org/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/copmi-logs")));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_session_file_default_is_resolved_lazily() {
        clear_env();

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.session_file, None);

        let config = config.with_session_file("/srv/copmi/session.json");
        assert_eq!(config.session_file().unwrap(), PathBuf::from("/srv/copmi/session.json"));
    }

    #[test]
    #[serial]
    fn test_rejects_bad_timeout() {
        clear_env();
        env::set_var("COPMI_SESSION_FILE", "/tmp/s.json");

        for bad in ["0", "-3", "soon"] {
            env::set_var("COPMI_HTTP_TIMEOUT_SECS", bad);
            assert_eq!(
                ClientConfig::from_env(),
                Err(ConfigError::InvalidValue {
                    name: "COPMI_HTTP_TIMEOUT_SECS",
                    value: bad.to_string(),
                })
            );
        }
        clear_env();
    }

    #[test]
    fn test_validate_requires_http_scheme() {
        let config = ClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
            session_file: Some(PathBuf::from("s.json")),
            log_dir: None,
        };

        assert!(config.clone().with_api_url("ftp://host/api").validate().is_err());
        assert_eq!(
            config.with_api_url("http://10.0.0.2:5000/api/").api_url,
            "http://10.0.0.2:5000/api"
        );
    }
}
