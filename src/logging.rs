use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize standard structured logging. `POTTIKADAI_LOG` overrides the
/// level; anything unparseable falls back to INFO.
pub fn init() {
    let level = std::env::var("POTTIKADAI_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok(); // Ignore err when re-initialized
}
