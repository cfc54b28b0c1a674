//! Built-in default values.
//!
//! The catalog is a single `const` value. Nothing in the process can mutate
//! it; the processor only reads from it.

use std::time::Duration;

/// Port value requesting that the listener bind an OS-assigned port.
pub const RANDOM_PORT: i32 = -1;

/// Conventional port for the HTTP monitoring endpoint.
pub const DEFAULT_HTTP_PORT: i32 = 8222;

const SSL_TIMEOUT: Duration = Duration::from_millis(500);
const AUTH_TIMEOUT: Duration = Duration::from_secs(1);

/// Baseline option values applied to unset fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    /// Client listener bind address.
    pub host: &'static str,

    /// Client listener port.
    pub port: i32,

    /// Maximum concurrent client connections.
    pub max_connections: usize,

    /// Interval between server-initiated pings.
    pub ping_interval: Duration,

    /// Unanswered pings before a connection is considered stale.
    pub max_pings_out: u32,

    /// TLS handshake timeout.
    pub ssl_timeout: Duration,

    /// Client authorization timeout.
    pub auth_timeout: Duration,

    /// Maximum length of a protocol control line in bytes.
    pub max_control_line: usize,

    /// Maximum message payload in bytes.
    pub max_payload: usize,

    /// Route authorization timeout.
    pub cluster_auth_timeout: Duration,
}

/// The process-wide default catalog.
pub const DEFAULTS: Defaults = Defaults {
    host: "0.0.0.0",
    port: 4222,
    max_connections: 64 * 1024,
    ping_interval: Duration::from_secs(2 * 60),
    max_pings_out: 2,
    ssl_timeout: SSL_TIMEOUT,
    auth_timeout: AUTH_TIMEOUT,
    max_control_line: 1024,
    max_payload: 1024 * 1024,
    cluster_auth_timeout: AUTH_TIMEOUT,
};

impl Defaults {
    /// TLS handshake timeout in fractional seconds.
    pub fn ssl_timeout_secs(&self) -> f64 {
        self.ssl_timeout.as_secs_f64()
    }

    /// Client authorization timeout in fractional seconds.
    pub fn auth_timeout_secs(&self) -> f64 {
        self.auth_timeout.as_secs_f64()
    }

    /// Route authorization timeout in fractional seconds.
    pub fn cluster_auth_timeout_secs(&self) -> f64 {
        self.cluster_auth_timeout.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_in_fractional_seconds() {
        assert_eq!(DEFAULTS.ssl_timeout_secs(), 0.5);
        assert_eq!(DEFAULTS.auth_timeout_secs(), 1.0);
        assert_eq!(DEFAULTS.cluster_auth_timeout_secs(), 1.0);
    }

    #[test]
    fn auth_timeout_is_twice_ssl_timeout() {
        assert_eq!(DEFAULTS.auth_timeout, DEFAULTS.ssl_timeout * 2);
    }

    #[test]
    fn sentinels_do_not_collide_with_default_port() {
        assert_ne!(RANDOM_PORT, DEFAULTS.port);
        assert_ne!(DEFAULT_HTTP_PORT, DEFAULTS.port);
        assert!(RANDOM_PORT < 0);
    }
}
