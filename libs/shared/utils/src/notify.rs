use tracing::warn;

/// Blocking user-facing message, the equivalent of a browser `alert`.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Notifier for headless use; alerts only reach the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!("alert: {}", message);
    }
}
