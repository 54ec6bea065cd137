//! Debug events for following a solve on stderr.
//!
//! At `debug` level the solver reports the size of the parsed network, where each walk entered its
//! cycle and how many arrivals it recorded, and how many candidate step sets survive each merge of
//! part two. Answers and timings never go through tracing.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, filtered by `RUST_LOG`:
///
/// ```bash
/// RUST_LOG=haunted_wasteland::walker=debug haunted-wasteland --input inputs/day08.txt
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
