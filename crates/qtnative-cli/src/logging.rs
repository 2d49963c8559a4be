//! Tracing setup for the `qtnative` binary.
//!
//! Library crates only emit events; the subscriber lives here. Everything
//! goes to stderr so stdout stays clean for results and `--output-format
//! json`. A set `RUST_LOG` replaces the flag-derived filter entirely.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level chosen on the command line.
const WORKSPACE_TARGETS: [&str; 4] = [
    "qtnative",
    "qtnative_core",
    "qtnative_adapters",
    "qtnative_image",
];

/// Install the global subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives(args.log_level()))
            .context("building log filter")?,
    };

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("a tracing subscriber is already installed")
}

/// `target=level` for each workspace crate, comma separated.
fn filter_directives(level: &str) -> String {
    WORKSPACE_TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives("debug"),
            "qtnative=debug,qtnative_core=debug,qtnative_adapters=debug,qtnative_image=debug"
        );
    }

    #[test]
    fn directives_parse_as_a_filter() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
        }
    }
}
