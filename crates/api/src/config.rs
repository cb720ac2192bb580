use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use hypergen_core::diagnostics::EnvPresence;

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin. The request's `Origin` is echoed back so credentials
    /// stay allowed.
    Any,
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Parsed from comma-separated `CORS_ORIGINS` (default: `*`).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Optional database used by the diagnostics endpoints.
    pub database_url: Option<String>,
    /// Only its presence is reported.
    pub database_name: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `8000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `DATABASE_URL`         | unset     |
    /// | `DATABASE_NAME`        | unset     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = parse_or(var("HOST"), "HOST", "IP address", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(var("PORT"), "PORT", "u16", 8000)?;
        let request_timeout_secs =
            parse_or(var("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", "u64", 30)?;
        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url: var("DATABASE_URL"),
            database_name: var("DATABASE_NAME"),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Which database variables were set, for the diagnostics report.
    pub fn env_presence(&self) -> EnvPresence {
        EnvPresence {
            database_url: self.database_url.is_some(),
            database_name: self.database_name.is_some(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var,
                expected,
                value: raw,
            }),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "origin",
                value: o.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.env_presence(), EnvPresence::default());
    }

    #[test]
    fn port_and_host_are_read() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "9100")]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9100");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
        assert_eq!(err.to_string(), r#"PORT must be a valid u16, got "eighty""#);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load(&[("PORT", ""), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.port, 8000);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn database_presence_is_tracked_separately() {
        let config = load(&[("DATABASE_NAME", "lunar")]).unwrap();
        assert_eq!(
            config.env_presence(),
            EnvPresence {
                database_url: false,
                database_name: true,
            }
        );
    }

    #[test]
    fn explicit_origins_are_listed() {
        let config = load(&[(
            "CORS_ORIGINS",
            "http://localhost:5173, https://app.example.com",
        )])
        .unwrap();
        assert_matches!(config.cors_origins, CorsOrigins::List(ref list) if list.len() == 2);
    }

    #[test]
    fn wildcard_anywhere_allows_any_origin() {
        let config = load(&[("CORS_ORIGINS", "http://localhost:5173,*")]).unwrap();
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let err = load(&[("CORS_ORIGINS", "http://bad\norigin")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "CORS_ORIGINS", .. });
    }
}
