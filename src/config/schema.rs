//! Options record definition.
//!
//! Every field uses its zero value to mean "unset". The loader and the flag
//! parser leave absent options at zero, the merger keeps the base value for
//! them and the processor replaces them with catalog defaults.

use std::time::Duration;

use serde::{Serialize, Serializer};
use url::Url;

/// Resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Options {
    /// Client listener bind address.
    pub host: String,

    /// Client listener port. `0` binds an ephemeral port once processed.
    pub port: i32,

    /// Port was explicitly requested as ephemeral. Keeps a processed `0`
    /// from being mistaken for an unset port on later passes.
    pub ephemeral_port: bool,

    /// HTTP monitoring port (`0` = disabled).
    pub http_port: i32,

    /// Profiling endpoint port (`0` = disabled).
    pub prof_port: i32,

    /// Client authorization user.
    pub username: String,

    /// Client authorization password.
    #[serde(skip_serializing)]
    pub password: String,

    /// Client authorization timeout in seconds.
    pub auth_timeout: f64,

    /// TLS handshake timeout in seconds.
    pub ssl_timeout: f64,

    /// Maximum concurrent client connections.
    pub max_conn: usize,

    /// Interval between server-initiated pings.
    #[serde(serialize_with = "serialize_secs")]
    pub ping_interval: Duration,

    /// Unanswered pings tolerated before closing a connection.
    pub max_pings_out: u32,

    /// Maximum protocol control line length in bytes.
    pub max_control_line: usize,

    /// Maximum message payload in bytes.
    pub max_payload: usize,

    pub debug: bool,
    pub trace: bool,

    /// Prefix log lines with timestamps.
    pub logtime: bool,

    pub log_file: String,
    pub pid_file: String,

    /// Route listener bind address.
    pub cluster_host: String,

    /// Route listener port.
    pub cluster_port: i32,

    pub cluster_username: String,

    #[serde(skip_serializing)]
    pub cluster_password: String,

    /// Route authorization timeout in seconds.
    pub cluster_auth_timeout: f64,

    /// Peer cluster members to connect to, in configured order.
    pub routes: Vec<Url>,
}

fn serialize_secs<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.as_secs_f64())
}

/// Zero-value-as-unset policy.
///
/// A value counts as set when it differs from its type's zero value. This
/// cannot express "explicitly false" or "explicitly empty": a `false` or `""`
/// layer is indistinguishable from one that never mentioned the option.
pub trait Setting {
    fn is_set(&self) -> bool;
}

macro_rules! numeric_setting {
    ($($ty:ty),*) => {
        $(
            impl Setting for $ty {
                fn is_set(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

numeric_setting!(i32, u32, usize);

impl Setting for f64 {
    fn is_set(&self) -> bool {
        *self != 0.0
    }
}

impl Setting for bool {
    fn is_set(&self) -> bool {
        *self
    }
}

impl Setting for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl Setting for Duration {
    fn is_set(&self) -> bool {
        !self.is_zero()
    }
}

impl<T> Setting for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}
