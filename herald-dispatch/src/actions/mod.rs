//! The notification actions.
//!
//! - [`send_mail`]: one message to an explicit recipient list
//! - [`mail_to_roles`]: one message per member of the given roles

pub mod mail_to_roles;
pub mod send_mail;

pub use mail_to_roles::MailToRoles;
pub use send_mail::SendMail;

/// Prefix combined with the action id to form the transport message key,
/// so transports can key templates or header rewrites per action.
pub(crate) const MAIL_KEY_PREFIX: &str = "action_mail.";

/// Locale used by [`SendMail`] when the parameters do not pin one.
pub(crate) const DEFAULT_LOCALE: &str = "en";
