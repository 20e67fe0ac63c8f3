pub mod builders;
pub mod recording_sink;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Upper bound for a runtime under test to drain its channel and stop.
pub const RUNTIME_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialise tracing for tests.
///
/// Logs are captured per test through `with_test_writer()` and only shown
/// for failing tests unless run with `-- --nocapture`.
///
/// Enable levels with e.g. `RUST_LOG=tasklink=debug cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await a runtime (or any other future) in a test, failing the test if it
/// has not finished within [`RUNTIME_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(RUNTIME_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("future still pending after {RUNTIME_TIMEOUT:?}"),
    }
}
