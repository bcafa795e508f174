//! One-shot tracing initialization for tests
//!
//! Tests across the workspace may race to install the global subscriber;
//! funnelling them through a `Lazy` keeps initialization idempotent.

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

/// Install the test subscriber; safe to call from every test
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
