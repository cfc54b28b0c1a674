//! Resolve and print the effective server configuration.
//!
//! # Flow
//!
//! ```text
//! config file ──┐
//!               ├─▶ merge ─▶ process ─▶ remove self-routes ─▶ stdout (JSON)
//! flags ────────┘
//! ```

use clap::Parser;

use cluster_config::cli::Flags;
use cluster_config::cluster::{remove_self_references, SystemResolver};
use cluster_config::config::{merge_options, process_config_file, process_options, Options};
use cluster_config::observability::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let flags = Flags::parse();
    let overrides = flags.to_options()?;

    let file_opts = match &flags.config {
        Some(path) => process_config_file(path)?,
        None => Options::default(),
    };

    let opts = process_options(merge_options(&file_opts, &overrides));
    init_logging(&opts)?;

    tracing::info!(
        config_file = ?flags.config,
        host = %opts.host,
        port = opts.port,
        http_port = opts.http_port,
        max_connections = opts.max_conn,
        routes = opts.routes.len(),
        "Configuration loaded"
    );

    let opts = remove_self_references(opts, &SystemResolver).await;

    println!("{}", serde_json::to_string_pretty(&opts)?);
    Ok(())
}
