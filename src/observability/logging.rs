//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber from resolved options
//! - Map debug/trace flags onto a default level
//! - Route output to the configured log file or stderr
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the level derived from options
//! - Timestamps only when `logtime` is set

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::Options;

/// Error type for logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

type Subscriber = Layered<EnvFilter, Registry>;

/// Default filter directive for the given options.
pub fn default_directive(opts: &Options) -> &'static str {
    if opts.trace {
        "trace"
    } else if opts.debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber.
pub fn init_logging(opts: &Options) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(opts)));

    let (writer, ansi) = if opts.log_file.is_empty() {
        (BoxMakeWriter::new(std::io::stderr), true)
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&opts.log_file)
            .map_err(|source| LoggingError::LogFile {
                path: PathBuf::from(&opts.log_file),
                source,
            })?;
        (BoxMakeWriter::new(Mutex::new(file)), false)
    };

    let layer: Box<dyn Layer<Subscriber> + Send + Sync> = if opts.logtime {
        fmt::layer().with_writer(writer).with_ansi(ansi).boxed()
    } else {
        fmt::layer()
            .without_time()
            .with_writer(writer)
            .with_ansi(ansi)
            .boxed()
    };

    tracing_subscriber::registry().with(filter).with(layer).try_init()?;
    Ok(())
}
