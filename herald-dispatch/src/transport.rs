//! The mail transport collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use herald_common::{Address, AddressList};

use crate::outcome::SendOutcome;

/// One fully addressed message handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Key identifying the producing action (e.g. `herald.send_mail`),
    /// available to transports that key templates or alter headers per
    /// message type.
    pub key: String,

    /// Recipient addresses.
    pub to: AddressList,

    /// Message subject.
    pub subject: String,

    /// Message body.
    pub body: String,

    /// Message locale.
    pub locale: String,

    /// Sender address.
    pub from: Address,
}

/// Transport that delivers a single addressed message.
///
/// Implementations are expected to apply their own timeouts and report a
/// timeout as [`SendOutcome::HardFailed`]; the dispatcher does not impose
/// one. A transport must be safe for sequential reuse across many
/// invocations — the dispatcher never calls it concurrently.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Hand one message to the transport.
    async fn send(&self, message: &OutboundMessage) -> SendOutcome;
}
