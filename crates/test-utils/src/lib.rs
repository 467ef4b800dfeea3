//! Shared helpers for taskgrid's integration and property tests.

pub mod builders;
pub mod fake_source;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-captured tracing subscriber once per test binary.
///
/// Output only shows up for failing tests (or with `--nocapture`). The
/// filter comes from `TASKGRID_LOG`, e.g. `TASKGRID_LOG=taskgrid=trace`,
/// and defaults to `warn` so layout traces stay quiet.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TASKGRID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .init();
    });
}
