//! Rule-engine email notification actions
//!
//! This crate provides the two notification actions a rule engine can
//! invoke, and the collaborator traits they are wired with:
//! - Validate typed action parameters before any send happens
//! - Send a single email to an explicit recipient list (`SendMail`)
//! - Broadcast one email per member of one or more roles (`MailToRoles`),
//!   skipping per-recipient soft failures and aborting the remainder of the
//!   loop on a transport-wide hard failure
//! - Aggregate per-recipient outcomes into a single [`DispatchReport`]

mod action;
pub mod actions;
mod cancel;
mod error;
mod notify;
mod outcome;
mod params;
mod resolver;
mod schema;
mod site;
mod transport;

pub use action::{Action, ActionRegistry};
pub use actions::{MailToRoles, SendMail};
pub use cancel::CancelToken;
// Re-export common types
pub use error::{ActionError, ResolutionError, ValidationError};
pub use herald_common::{Address, AddressError, AddressList, SiteConfig};
pub use notify::{Notifier, TracingNotifier};
pub use outcome::{DispatchReport, SendOutcome};
pub use params::{ActionParameters, Recipient};
pub use resolver::RecipientResolver;
pub use schema::{ParameterKind, ParameterSchema, ParameterSpec};
pub use site::SiteDefaultSender;
pub use transport::{MailTransport, OutboundMessage};
