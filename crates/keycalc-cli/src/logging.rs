//! Diagnostic logging setup
//!
//! Diagnostics always go to stderr so stdout carries only calculator output.
//! `RUST_LOG` overrides the level chosen by `-v`/`-q`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, OutputFormat};

/// Builds the filter for a configuration, preferring `RUST_LOG`
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber; a second call is a no-op
pub fn init(config: &CliConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // JSON reports get JSON diagnostics
    let installed = match config.format {
        OutputFormat::Json => registry.with(layer.json()).try_init(),
        OutputFormat::Text => registry.with(layer.compact()).try_init(),
    };
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
