use tracing::Level;

/// Installs the global stderr subscriber. Returns `false` when one was
/// already installed, leaving it in place.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
