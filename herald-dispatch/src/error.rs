//! Typed error handling for notification actions.
//!
//! Only input and resolution problems surface as errors: a send that fails
//! at the transport is folded into the returned [`DispatchReport`]
//! (`delivered < attempted`, or `aborted` on a transport-wide failure)
//! rather than raised.
//!
//! [`DispatchReport`]: crate::DispatchReport

use herald_common::AddressError;
use thiserror::Error;

/// Top-level action error type.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Bad or missing input. No send was attempted.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The recipient resolver backend failed. Aborts before any send.
    #[error("Recipient resolution failed: {0}")]
    Resolution(#[from] ResolutionError),
}

/// Input validation errors, checked before any collaborator is called.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The recipient list (addresses or role ids) is empty.
    #[error("No recipients supplied")]
    NoRecipients,

    /// The subject is empty.
    #[error("Subject must not be empty")]
    EmptySubject,

    /// A recipient or sender address failed the syntax check.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
}

/// Recipient resolution backend failures.
///
/// Unknown or deleted roles are not errors; they resolve to nothing. This
/// error is reserved for the backend itself being unavailable, including
/// resolver-side timeouts.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The membership backend is unreachable or returned a failure.
    #[error("Membership backend unavailable: {0}")]
    Backend(String),

    /// The resolver timed out.
    #[error("Resolution timed out: {0}")]
    Timeout(String),
}
