//! Cooperative cancellation for in-flight broadcasts.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared flag a caller can raise to stop an in-flight broadcast.
///
/// Checked between sends; a cancelled broadcast stops issuing further sends
/// and returns the partial report accumulated so far. Deliveries that
/// already happened stand.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether the flag has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
