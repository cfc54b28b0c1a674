//! Layered configuration resolution for a clustered message server.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod observability;

pub use cluster::{remove_self_references, SystemResolver};
pub use config::{merge_options, process_config_file, process_options, Options};
