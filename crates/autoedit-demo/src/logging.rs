#![forbid(unsafe_code)]

//! Log subscriber setup for the demo binary.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info,autoedit_text=debug";

/// Pick the filter directive: explicit flag, then `RUST_LOG`, then the
/// default. Blank values count as unset.
#[must_use]
pub fn filter_directive<'a>(explicit: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    explicit
        .filter(|d| !d.trim().is_empty())
        .or_else(|| rust_log.filter(|d| !d.trim().is_empty()))
        .unwrap_or(DEFAULT_FILTER)
}

/// Install a stderr `fmt` subscriber. Does nothing if one is already set.
pub fn init(explicit: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(explicit, rust_log.as_deref());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("Invalid log filter {directive:?}: {err}; using {DEFAULT_FILTER:?}");
        EnvFilter::new(DEFAULT_FILTER)
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
