use tracing_subscriber::EnvFilter;

/// Route logs to the test harness; honours `RUST_LOG`, quiet by default.
pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
