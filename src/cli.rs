//! Command-line flag definitions.
//!
//! Flags form the highest-priority layer. Anything not given on the command
//! line is left at its zero value so the merge keeps the lower layers.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{check_listen_port, check_port};
use crate::config::{routes_from_str, ConfigError, Options};

/// Resolve the effective server configuration.
#[derive(Parser, Debug, Default)]
#[command(name = "cluster-config")]
pub struct Flags {
    /// Configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Client listener bind address.
    #[arg(short = 'a', long = "addr", alias = "net", value_name = "HOST")]
    pub host: Option<String>,

    /// Client listener port (-1 for an ephemeral port).
    #[arg(short = 'p', long = "port", allow_negative_numbers = true)]
    pub port: Option<i32>,

    /// HTTP monitoring port.
    #[arg(short = 'm', long = "http_port", alias = "http-port")]
    pub http_port: Option<i32>,

    /// Profiling endpoint port.
    #[arg(long = "profile")]
    pub prof_port: Option<i32>,

    /// Client authorization user.
    #[arg(long = "user")]
    pub username: Option<String>,

    /// Client authorization password.
    #[arg(long = "pass")]
    pub password: Option<String>,

    /// Enable debug logging.
    #[arg(short = 'D', long = "debug")]
    pub debug: bool,

    /// Enable protocol trace logging.
    #[arg(short = 'V', long = "trace")]
    pub trace: bool,

    /// Timestamp log lines.
    #[arg(short = 'T', long = "logtime")]
    pub logtime: bool,

    /// Log file path.
    #[arg(short = 'l', long = "log", value_name = "FILE")]
    pub log_file: Option<String>,

    /// PID file path.
    #[arg(short = 'P', long = "pid", value_name = "FILE")]
    pub pid_file: Option<String>,

    /// Comma-separated route URLs to solicit.
    #[arg(long = "routes", value_name = "URLS")]
    pub routes: Option<String>,
}

impl Flags {
    /// Build the override layer from the parsed flags.
    pub fn to_options(&self) -> Result<Options, ConfigError> {
        let routes = match &self.routes {
            Some(routes) => routes_from_str(routes)?,
            None => Vec::new(),
        };

        Ok(Options {
            host: self.host.clone().unwrap_or_default(),
            port: check_listen_port("port", self.port.unwrap_or_default())?,
            http_port: check_port("http_port", self.http_port.unwrap_or_default())?,
            prof_port: check_port("prof_port", self.prof_port.unwrap_or_default())?,
            username: self.username.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            debug: self.debug,
            trace: self.trace,
            logtime: self.logtime,
            log_file: self.log_file.clone().unwrap_or_default(),
            pid_file: self.pid_file.clone().unwrap_or_default(),
            routes,
            ..Options::default()
        })
    }
}
