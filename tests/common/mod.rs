//! Shared helpers for integration tests

/// Install a tracing subscriber when `TEST_TRACE` is set
///
/// Accepts `trace`, `debug` (or `true`/`on`), `info`, `warn`, `error`.
pub fn init_test_tracing() {
    let Ok(value) = std::env::var("TEST_TRACE") else {
        return;
    };
    let level = match value.as_str() {
        "true" | "debug" | "on" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => return,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_test_writer()
        .try_init();
}
