//! Self-referential route removal.
//!
//! A route whose host names this process would make the server dial itself.
//! Such routes are dropped by exact string comparison against the
//! [`LocalIdentity`]; an address reaching this machine through another
//! interface is not detected.

use url::{Host, Url};

use crate::cluster::identity::{IdentityResolver, LocalIdentity};
use crate::config::Options;

/// Host component of a route URL, without IPv6 brackets.
pub fn route_host(route: &Url) -> Option<String> {
    match route.host()? {
        Host::Ipv6(addr) => Some(addr.to_string()),
        host => Some(host.to_string()),
    }
}

/// Drop routes whose host matches the given identity.
///
/// Surviving routes keep their relative order; every other field is
/// returned unchanged.
pub fn filter_self_references(mut opts: Options, identity: &LocalIdentity) -> Options {
    opts.routes.retain(|route| {
        let is_self = route_host(route).is_some_and(|host| identity.matches(&host));
        if is_self {
            tracing::debug!(route = %route, "Removing self-referencing route");
        }
        !is_self
    });
    opts
}

/// Resolve the local identity once and drop self-referencing routes.
///
/// Resolution failures leave the route list as it was.
pub async fn remove_self_references<R: IdentityResolver>(opts: Options, resolver: &R) -> Options {
    if opts.routes.is_empty() {
        return opts;
    }

    let identity = resolver.resolve().await;
    if identity.is_empty() {
        tracing::warn!("Local identity unknown, keeping all configured routes");
    }

    let before = opts.routes.len();
    let opts = filter_self_references(opts, &identity);

    tracing::info!(
        configured = before,
        retained = opts.routes.len(),
        "Filtered cluster routes"
    );

    opts
}
