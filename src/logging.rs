use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DASHPRUNE_LOG";

/// Installs the stderr subscriber. `quiet` is used by the TUI: unless
/// `DASHPRUNE_LOG` asks for output explicitly, nothing is written while the
/// alternate screen is up.
pub fn init(quiet: bool) {
    let explicit = std::env::var(LOG_ENV).ok();
    if quiet && explicit.is_none() {
        return;
    }
    let filter = explicit
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
