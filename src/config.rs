use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{HevyError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.hevyapp.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `HEVY_API_KEY`, plus the optional `BASE_URL` and `HEVY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("HEVY_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| HevyError::Config("HEVY_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = get("BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(raw) = get("HEVY_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                HevyError::Config(format!("HEVY_TIMEOUT_SECS must be an integer, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("key-123");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.base_url, "https://api.hevyapp.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("key")
            .with_base_url("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_lookup_requires_api_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, HevyError::Config(_)));

        let err = Config::from_lookup(lookup(&[("HEVY_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, HevyError::Config(_)));
    }

    #[test]
    fn test_lookup_defaults_and_overrides() {
        let config = Config::from_lookup(lookup(&[("HEVY_API_KEY", "key-123")])).unwrap();
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let config = Config::from_lookup(lookup(&[
            ("HEVY_API_KEY", "key-123"),
            ("BASE_URL", "http://localhost:8080"),
            ("HEVY_TIMEOUT_SECS", " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_lookup_rejects_non_integer_timeout() {
        let err = Config::from_lookup(lookup(&[
            ("HEVY_API_KEY", "key-123"),
            ("HEVY_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        match err {
            HevyError::Config(message) => assert!(message.contains("HEVY_TIMEOUT_SECS")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("super-secret-key");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("[redacted]"));
        assert!(rendered.contains("api.hevyapp.com"));
    }
}
