//! Typed action parameters and resolved recipients.

use serde::{Deserialize, Serialize};

use herald_common::Address;

/// Immutable input bundle for one action invocation.
///
/// `recipients` is interpreted per action: explicit email addresses for
/// [`SendMail`], role ids for [`MailToRoles`]. The optional sender fields
/// mirror the original rule contexts: `reply_to` belongs to the single-send
/// action, `from` to the broadcast; the owning action reads its own and
/// falls back to the site default sender.
///
/// [`SendMail`]: crate::SendMail
/// [`MailToRoles`]: crate::MailToRoles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionParameters {
    /// Email addresses or role ids, depending on the action.
    pub recipients: Vec<String>,

    /// Message subject. Must be non-empty.
    pub subject: String,

    /// Message body. May be empty.
    pub body: String,

    /// Reply-to address override (single-send action).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// From address override (broadcast action).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Fixed message locale. When absent, the broadcast uses each
    /// recipient's preferred locale and the single send a process default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl ActionParameters {
    /// Build a parameter bundle for the given recipients.
    pub fn new<I, S>(recipients: I, subject: impl Into<String>, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recipients: recipients.into_iter().map(Into::into).collect(),
            subject: subject.into(),
            body: body.into(),
            reply_to: None,
            from: None,
            locale: None,
        }
    }

    /// Set the reply-to override.
    #[must_use]
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Set the from override.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Pin the message locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// One resolved role member.
///
/// Derived per invocation from role membership; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// The member's email address.
    pub address: Address,

    /// The member's preferred message locale.
    pub preferred_locale: String,
}

impl Recipient {
    /// Construct a recipient record.
    #[must_use]
    pub fn new(address: Address, preferred_locale: impl Into<String>) -> Self {
        Self {
            address,
            preferred_locale: preferred_locale.into(),
        }
    }
}
