//! Diagnostic logging to stderr.
//!
//! Stdout carries table output, so every event goes to stderr. The filter
//! comes from `LIN_LOG` (same syntax as `RUST_LOG`).

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Later calls do nothing.
pub fn init_logging(filter: &str) {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
            eprintln!("lin: ignoring invalid LIN_LOG `{}`: {}", filter, err);
            EnvFilter::new(DEFAULT_LOG_FILTER)
        });

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal());

        // Another subscriber may already be installed (tests); keep it.
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init();
    });
}
