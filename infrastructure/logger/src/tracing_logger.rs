use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

pub const LOG_TARGET: &str = "product_catalog";

/// [`Logger`] adapter forwarding to `tracing` under [`LOG_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

/// Installs the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
