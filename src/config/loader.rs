//! Configuration loading from disk.
//!
//! Maps a TOML file onto [`Options`]. Absent keys stay at their zero value;
//! defaults are applied later by the processor.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::defaults::RANDOM_PORT;
use crate::config::schema::Options;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid route url {route:?}: {source}")]
    Route {
        route: String,
        source: url::ParseError,
    },

    #[error("{key} out of range: {value}")]
    OutOfRange { key: &'static str, value: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    #[serde(alias = "net")]
    host: Option<String>,
    port: Option<i32>,
    #[serde(alias = "monitor_port")]
    http_port: Option<i32>,
    prof_port: Option<i32>,
    debug: Option<bool>,
    trace: Option<bool>,
    logtime: Option<bool>,
    #[serde(alias = "logfile")]
    log_file: Option<String>,
    #[serde(alias = "pidfile")]
    pid_file: Option<String>,
    max_connections: Option<usize>,
    /// Seconds.
    ping_interval: Option<u64>,
    ping_max: Option<u32>,
    max_control_line: Option<usize>,
    max_payload: Option<usize>,
    authorization: Option<AuthorizationBlock>,
    cluster: Option<ClusterBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthorizationBlock {
    user: Option<String>,
    password: Option<String>,
    /// Seconds.
    timeout: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClusterBlock {
    #[serde(alias = "net")]
    host: Option<String>,
    port: Option<i32>,
    authorization: Option<AuthorizationBlock>,
    routes: Vec<String>,
}

/// Load options from a TOML configuration file.
pub fn process_config_file(path: &Path) -> Result<Options, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Parse options from TOML text.
pub fn parse_config(content: &str) -> Result<Options, ConfigError> {
    let file: FileConfig = toml::from_str(content)?;
    file.into_options()
}

/// Accept `0..=65535`.
pub(crate) fn check_port(key: &'static str, port: i32) -> Result<i32, ConfigError> {
    if (0..=i32::from(u16::MAX)).contains(&port) {
        Ok(port)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: port.to_string(),
        })
    }
}

/// Accept `0..=65535` or the random-port sentinel.
pub(crate) fn check_listen_port(key: &'static str, port: i32) -> Result<i32, ConfigError> {
    if port == RANDOM_PORT {
        Ok(port)
    } else {
        check_port(key, port)
    }
}

/// Accept finite, non-negative seconds.
fn check_secs(key: &'static str, secs: f64) -> Result<f64, ConfigError> {
    if secs.is_finite() && secs >= 0.0 {
        Ok(secs)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: secs.to_string(),
        })
    }
}

/// Parse a single route URL.
pub(crate) fn parse_route(route: &str) -> Result<Url, ConfigError> {
    Url::parse(route).map_err(|source| ConfigError::Route {
        route: route.to_string(),
        source,
    })
}

impl FileConfig {
    fn into_options(self) -> Result<Options, ConfigError> {
        let auth = self.authorization.unwrap_or_default();
        let cluster = self.cluster.unwrap_or_default();
        let cluster_auth = cluster.authorization.unwrap_or_default();

        let routes = cluster
            .routes
            .iter()
            .map(|route| parse_route(route))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Options {
            host: self.host.unwrap_or_default(),
            port: check_listen_port("port", self.port.unwrap_or_default())?,
            http_port: check_port("http_port", self.http_port.unwrap_or_default())?,
            prof_port: check_port("prof_port", self.prof_port.unwrap_or_default())?,
            username: auth.user.unwrap_or_default(),
            password: auth.password.unwrap_or_default(),
            auth_timeout: check_secs("authorization.timeout", auth.timeout.unwrap_or_default())?,
            max_conn: self.max_connections.unwrap_or_default(),
            ping_interval: self
                .ping_interval
                .map(Duration::from_secs)
                .unwrap_or_default(),
            max_pings_out: self.ping_max.unwrap_or_default(),
            max_control_line: self.max_control_line.unwrap_or_default(),
            max_payload: self.max_payload.unwrap_or_default(),
            debug: self.debug.unwrap_or_default(),
            trace: self.trace.unwrap_or_default(),
            logtime: self.logtime.unwrap_or_default(),
            log_file: self.log_file.unwrap_or_default(),
            pid_file: self.pid_file.unwrap_or_default(),
            cluster_host: cluster.host.unwrap_or_default(),
            cluster_port: check_port("cluster.port", cluster.port.unwrap_or_default())?,
            cluster_username: cluster_auth.user.unwrap_or_default(),
            cluster_password: cluster_auth.password.unwrap_or_default(),
            cluster_auth_timeout: check_secs(
                "cluster.authorization.timeout",
                cluster_auth.timeout.unwrap_or_default(),
            )?,
            routes,
            ..Options::default()
        })
    }
}
