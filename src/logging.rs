//! Logging setup
//!
//! Logs go to stderr so stdout carries only the answers. `RUST_LOG` overrides the
//! default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "aoc2023=debug" } else { "aoc2023=warn" }
}

/// Install the global subscriber for the CLI
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug() {
        assert_eq!(default_directive(true), "aoc2023=debug");
        assert_eq!(default_directive(false), "aoc2023=warn");
    }
}
