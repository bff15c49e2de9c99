use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read from the environment
///
/// | Variable              | Default   |
/// |-----------------------|-----------|
/// | `HOST`                | `0.0.0.0` |
/// | `PORT`                | `3000`    |
/// | `CORS_ALLOWED_ORIGIN` | any       |
/// | `BOARD_EVENT_BUFFER`  | `64`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_allowed_origin: Option<String>,
    pub event_buffer: usize,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_EVENT_BUFFER: usize = 64;

    /// Reads configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a key to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "HOST", value })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => Self::DEFAULT_PORT,
        };

        let event_buffer = match lookup("BOARD_EVENT_BUFFER") {
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BOARD_EVENT_BUFFER",
                        value,
                    })
                }
            },
            None => Self::DEFAULT_EVENT_BUFFER,
        };

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|v| !v.trim().is_empty());

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
            event_buffer,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: Self::DEFAULT_PORT,
            cors_allowed_origin: None,
            event_buffer: Self::DEFAULT_EVENT_BUFFER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_all_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:5173"),
            ("BOARD_EVENT_BUFFER", "16"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("http://localhost:5173")
        );
        assert_eq!(config.event_buffer, 16);
    }

    #[test]
    fn invalid_port_fails() {
        let result = AppConfig::from_lookup(lookup(&[("PORT", "http")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                key: "PORT",
                value: "http".to_string()
            }
        );
    }

    #[test]
    fn invalid_host_fails() {
        assert!(AppConfig::from_lookup(lookup(&[("HOST", "localhost:1")])).is_err());
    }

    #[test]
    fn zero_event_buffer_fails() {
        let result = AppConfig::from_lookup(lookup(&[("BOARD_EVENT_BUFFER", "0")]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "BOARD_EVENT_BUFFER",
                ..
            })
        ));
    }

    #[test]
    fn blank_cors_origin_means_any() {
        let config = AppConfig::from_lookup(lookup(&[("CORS_ALLOWED_ORIGIN", "  ")])).unwrap();

        assert!(config.cors_allowed_origin.is_none());
    }
}
