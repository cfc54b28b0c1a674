//! Cluster route post-processing.
//!
//! # Data Flow
//! ```text
//! finalized Options
//!     → identity.rs (resolve localhost addresses, reverse-DNS of 127.0.0.1)
//!     → self_reference.rs (drop routes whose host is a local identity)
//!     → Options with pruned route list
//! ```
//!
//! # Design Decisions
//! - Resolution failure is never fatal; routes are kept instead
//! - Host comparison is exact string equality

pub mod identity;
pub mod self_reference;

pub use identity::{IdentityResolver, LocalIdentity, StaticResolver, SystemResolver};
pub use self_reference::{filter_self_references, remove_self_references, route_host};
