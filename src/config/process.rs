//! Option finalization.
//!
//! Fills every unset field that has a catalog default and normalizes the
//! random-port sentinel. Fields without a default (monitoring ports, cluster
//! listener, credentials, diagnostics) pass through unchanged.
//!
//! Random-port normalization is terminal: the record remembers the request
//! in `ephemeral_port`, so a processed `0` stays `0` on later passes.

use crate::config::defaults::{DEFAULTS, RANDOM_PORT};
use crate::config::schema::{Options, Setting};

/// Apply catalog defaults to unset fields.
pub fn process_options(mut opts: Options) -> Options {
    if !opts.host.is_set() {
        opts.host = DEFAULTS.host.to_string();
    }

    if opts.port == RANDOM_PORT {
        opts.port = 0;
        opts.ephemeral_port = true;
    } else if opts.port.is_set() {
        opts.ephemeral_port = false;
    } else if !opts.ephemeral_port {
        opts.port = DEFAULTS.port;
    }

    if !opts.max_conn.is_set() {
        opts.max_conn = DEFAULTS.max_connections;
    }
    if !opts.ping_interval.is_set() {
        opts.ping_interval = DEFAULTS.ping_interval;
    }
    if !opts.max_pings_out.is_set() {
        opts.max_pings_out = DEFAULTS.max_pings_out;
    }

    // Both auth timeouts share a base constant but are filled independently.
    if !opts.ssl_timeout.is_set() {
        opts.ssl_timeout = DEFAULTS.ssl_timeout_secs();
    }
    if !opts.auth_timeout.is_set() {
        opts.auth_timeout = DEFAULTS.auth_timeout_secs();
    }
    if !opts.cluster_auth_timeout.is_set() {
        opts.cluster_auth_timeout = DEFAULTS.cluster_auth_timeout_secs();
    }

    if !opts.max_control_line.is_set() {
        opts.max_control_line = DEFAULTS.max_control_line;
    }
    if !opts.max_payload.is_set() {
        opts.max_payload = DEFAULTS.max_payload;
    }

    opts
}
