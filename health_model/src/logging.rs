//! Logging setup for applications embedding the health model.
//!
//! Entities only emit `tracing` events; a host installs a subscriber once
//! through [`init`] or [`init_with_level`]. Later calls are no-ops.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INSTALLED: OnceCell<bool> = OnceCell::new();

/// Install the global subscriber at INFO for this crate
///
/// Returns whether the subscriber installed by this module is the active one.
pub fn init() -> bool {
    init_with_level("info")
}

/// Install the global subscriber with a default level for this crate
///
/// `RUST_LOG` overrides the default. Other crates log at WARN unless
/// `RUST_LOG` says otherwise. Only the first call in a process has any
/// effect; a subscriber installed elsewhere first is left in place.
pub fn init_with_level(default_level: &str) -> bool {
    *INSTALLED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default_level));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
            .is_ok()
    })
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level))
}

/// Initialize logging for testing (captures logs for test output)
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
