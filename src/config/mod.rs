//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse, map onto Options; absent keys stay zero)
//! command-line flags
//!     → cli.rs (override Options; absent flags stay zero)
//!
//! merge.rs (override wins where set)
//!     → process.rs (catalog defaults, random-port normalization)
//!     → cluster::self_reference (drop routes pointing at this process)
//!     → Options handed to the server
//! ```
//!
//! # Design Decisions
//! - Zero value means "unset" in every layer (see [`schema::Setting`])
//! - Defaults live in one frozen catalog, applied only by the processor
//! - Every stage takes and returns owned records; nothing is shared mutably

pub mod defaults;
pub mod loader;
pub mod merge;
pub mod process;
pub mod routes;
pub mod schema;

pub use defaults::{Defaults, DEFAULTS, DEFAULT_HTTP_PORT, RANDOM_PORT};
pub use loader::{parse_config, process_config_file, ConfigError};
pub use merge::merge_options;
pub use process::process_options;
pub use routes::routes_from_str;
pub use schema::{Options, Setting};
