#![cfg(test)]

//! Unified test logging initialization.
//!
//! One-time guarded `tracing` subscriber setup shared by unit tests. The
//! level is controlled by `TEST_LOG`, then `RUST_LOG`, then a quiet `warn`
//! default. `with_test_writer` keeps output inside cargo's capture.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests. Idempotent and race-safe.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
