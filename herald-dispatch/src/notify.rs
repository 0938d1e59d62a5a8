//! The notice logger collaborator.
//!
//! Actions emit at most one success notice per invocation. The collaborator
//! is fire-and-forget: it must never block or fail the dispatcher.

use std::collections::BTreeMap;

use tracing::info;

/// Sink for action success notices.
pub trait Notifier: Send + Sync {
    /// Record one notice with structured context.
    fn notice(&self, message: &str, context: &BTreeMap<String, String>);
}

/// Production notifier that forwards notices to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notice(&self, message: &str, context: &BTreeMap<String, String>) {
        info!(context = ?context, "{message}");
    }
}
