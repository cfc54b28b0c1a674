//! Layered option merging.
//!
//! An override field wins when it is set under the [`Setting`] policy;
//! otherwise the base value is kept. A `false` override therefore never
//! disables a flag enabled by the base layer.

use crate::config::schema::{Options, Setting};

fn pick<T: Setting + Clone>(base: &T, overrides: &T) -> T {
    if overrides.is_set() {
        overrides.clone()
    } else {
        base.clone()
    }
}

/// Combine a base record with an override record.
///
/// Neither input is modified and no defaults are applied. Route lists are
/// replaced wholesale when the override carries any routes.
pub fn merge_options(base: &Options, overrides: &Options) -> Options {
    // Port and its ephemeral marker travel together.
    let (port, ephemeral_port) = if overrides.port.is_set() || overrides.ephemeral_port {
        (overrides.port, overrides.ephemeral_port)
    } else {
        (base.port, base.ephemeral_port)
    };

    Options {
        host: pick(&base.host, &overrides.host),
        port,
        ephemeral_port,
        http_port: pick(&base.http_port, &overrides.http_port),
        prof_port: pick(&base.prof_port, &overrides.prof_port),
        username: pick(&base.username, &overrides.username),
        password: pick(&base.password, &overrides.password),
        auth_timeout: pick(&base.auth_timeout, &overrides.auth_timeout),
        ssl_timeout: pick(&base.ssl_timeout, &overrides.ssl_timeout),
        max_conn: pick(&base.max_conn, &overrides.max_conn),
        ping_interval: pick(&base.ping_interval, &overrides.ping_interval),
        max_pings_out: pick(&base.max_pings_out, &overrides.max_pings_out),
        max_control_line: pick(&base.max_control_line, &overrides.max_control_line),
        max_payload: pick(&base.max_payload, &overrides.max_payload),
        debug: pick(&base.debug, &overrides.debug),
        trace: pick(&base.trace, &overrides.trace),
        logtime: pick(&base.logtime, &overrides.logtime),
        log_file: pick(&base.log_file, &overrides.log_file),
        pid_file: pick(&base.pid_file, &overrides.pid_file),
        cluster_host: pick(&base.cluster_host, &overrides.cluster_host),
        cluster_port: pick(&base.cluster_port, &overrides.cluster_port),
        cluster_username: pick(&base.cluster_username, &overrides.cluster_username),
        cluster_password: pick(&base.cluster_password, &overrides.cluster_password),
        cluster_auth_timeout: pick(&base.cluster_auth_timeout, &overrides.cluster_auth_timeout),
        routes: pick(&base.routes, &overrides.routes),
    }
}
