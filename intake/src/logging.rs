//! Process-wide tracing for the drills.
//!
//! Records go to stderr so they never interleave with the prompts and answers
//! written to stdout. The `log-age` drill relies on this subscriber for its
//! warning; everything else only emits `debug`/`info` records.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparseable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Output: stderr, compact format, no timestamps or targets.
///
/// # Example
/// ```bash
/// RUST_LOG=intake=debug intake students
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
