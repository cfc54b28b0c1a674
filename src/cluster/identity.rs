//! Local network identity discovery.
//!
//! # Responsibilities
//! - Collect the addresses `localhost` resolves to
//! - Collect the reverse-DNS names of `127.0.0.1`
//! - Degrade to an empty identity when resolution fails
//!
//! # Design Decisions
//! - Single attempt per lookup, OS resolver timeouts apply
//! - Both lookups go through the OS resolver (`getaddrinfo`/`getnameinfo`),
//!   so hosts-file names come back as written rather than as DNS FQDNs
//! - Names and addresses are kept as literal strings; no case folding,
//!   trailing-dot trimming or address canonicalization

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};

const LOCALHOST: &str = "localhost";
const LOOPBACK: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Strings that identify the running process on the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalIdentity {
    addresses: Vec<String>,
    hostnames: Vec<String>,
}

impl LocalIdentity {
    /// Build an identity from resolved addresses and reverse-DNS names.
    pub fn new<A, H>(addresses: A, hostnames: H) -> Self
    where
        A: IntoIterator<Item = IpAddr>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        let mut identity = Self::default();
        for addr in addresses {
            push_unique(&mut identity.addresses, addr.to_string());
        }
        for name in hostnames {
            push_unique(&mut identity.hostnames, name.into());
        }
        identity
    }

    /// Address strings, in resolution order.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Reverse-DNS names, in resolution order.
    pub fn hostnames(&self) -> &[String] {
        &self.hostnames
    }

    /// True when neither addresses nor names are known.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty() && self.hostnames.is_empty()
    }

    /// Exact string comparison against every known address and name.
    pub fn matches(&self, host: &str) -> bool {
        self.addresses
            .iter()
            .chain(self.hostnames.iter())
            .any(|known| known == host)
    }
}

// IPv4 and IPv6 lookups frequently return the same entry twice.
fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Source of the local identity.
pub trait IdentityResolver {
    /// Resolve the identity. Never fails; unknown means empty.
    fn resolve(&self) -> impl Future<Output = LocalIdentity> + Send;
}

/// Resolver backed by the operating system's name service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    async fn lookup_localhost(&self) -> Vec<IpAddr> {
        match tokio::net::lookup_host((LOCALHOST, 0)).await {
            Ok(addrs) => addrs.map(|addr| addr.ip()).collect(),
            Err(e) => {
                tracing::warn!(error = %e, host = LOCALHOST, "Failed to resolve local addresses");
                Vec::new()
            }
        }
    }

    async fn reverse_loopback(&self) -> Vec<String> {
        // getnameinfo blocks and consults the hosts file before DNS.
        let lookup = tokio::task::spawn_blocking(|| dns_lookup::lookup_addr(&LOOPBACK)).await;

        match lookup {
            Ok(Ok(name)) => vec![name],
            Ok(Err(e)) => {
                tracing::warn!(error = %e, addr = %LOOPBACK, "Reverse lookup failed");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, addr = %LOOPBACK, "Reverse lookup task failed");
                Vec::new()
            }
        }
    }
}

impl IdentityResolver for SystemResolver {
    async fn resolve(&self) -> LocalIdentity {
        let addresses = self.lookup_localhost().await;
        let hostnames = self.reverse_loopback().await;

        let identity = LocalIdentity::new(addresses, hostnames);
        tracing::debug!(
            addresses = ?identity.addresses(),
            hostnames = ?identity.hostnames(),
            "Resolved local identity"
        );
        identity
    }
}

/// Resolver that always returns the same identity.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    identity: LocalIdentity,
}

impl StaticResolver {
    /// Create a resolver answering with `identity`.
    pub fn new(identity: LocalIdentity) -> Self {
        Self { identity }
    }
}

impl IdentityResolver for StaticResolver {
    async fn resolve(&self) -> LocalIdentity {
        self.identity.clone()
    }
}
