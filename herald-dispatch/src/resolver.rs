//! The recipient resolver collaborator.

use async_trait::async_trait;

use crate::{error::ResolutionError, params::Recipient};

/// Maps role ids to the concrete members to notify.
///
/// The resolver owns deduplication: a member holding two of the requested
/// roles must appear once in the result. Unknown or deleted role ids
/// resolve to nothing — only backend unavailability is an error. Result
/// order is resolver-defined and need not be stable across calls.
#[async_trait]
pub trait RecipientResolver: Send + Sync {
    /// Resolve the given role ids to a deduplicated recipient list.
    ///
    /// # Errors
    /// Returns a [`ResolutionError`] only when the membership backend
    /// itself fails.
    async fn resolve(&self, role_ids: &[String]) -> Result<Vec<Recipient>, ResolutionError>;
}
