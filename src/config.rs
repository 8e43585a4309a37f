//! Configuration loading and constants.
//!
//! The only runtime setting is the listen port, read from the `PORT`
//! environment variable. Logging options come from the command line (see
//! `main.rs`). Everything else is a fixed constant defined here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

// =============================================================================
// Network
// =============================================================================

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is absent or not a valid port number
pub const DEFAULT_PORT: u16 = 8080;

/// Listen on all interfaces
pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Host token used to resolve request targets when no Host header is sent
pub const DEFAULT_HOST_TOKEN: &str = "localhost";

// =============================================================================
// Paths
// =============================================================================

/// Debug endpoint that terminates the process
pub const CRASH_PATH: &str = "/crash";

/// Health check endpoint polled by the orchestrator
pub const HEALTH_PATH: &str = "/healthz";

// =============================================================================
// Crash behaviour
// =============================================================================

/// Delay between answering `/crash` and exiting, so the response can reach the client
pub const CRASH_EXIT_DELAY: Duration = Duration::from_millis(50);

/// Exit status used by `/crash`
pub const CRASH_EXIT_CODE: i32 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "healthz_server=info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Listen address configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: BIND_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV) {
            None => DEFAULT_PORT,
            Some(value) => parse_port(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
        };

        Self {
            host: BIND_HOST,
            port,
        }
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parses a decimal port number, ignoring surrounding whitespace.
pub fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_port(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            if key == PORT_ENV {
                value.map(str::to_string)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("3000"), Some(3000));
        assert_eq!(parse_port(" 9090 "), Some(9090));
    }

    #[test]
    fn test_parse_port_invalid() {
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("http"), None);
        assert_eq!(parse_port("-1"), None);
        // Out of u16 range
        assert_eq!(parse_port("70000"), None);
    }

    #[test]
    fn test_from_lookup_invalid_port_uses_default() {
        let config = ServerConfig::from_lookup(lookup_port(Some("not-a-port")));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_from_lookup_binds_all_interfaces() {
        let config = ServerConfig::from_lookup(lookup_port(Some("5000")));
        assert_eq!(config.port, 5000);
        assert_eq!(config.addr(), "0.0.0.0:5000".parse().unwrap());
    }

    #[test]
    fn test_from_lookup_missing_port() {
        let config = ServerConfig::from_lookup(lookup_port(None));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8080);
    }
}
