//! The site default sender collaborator.

use herald_common::{Address, SiteConfig};

/// Source of the site-wide default sender address.
///
/// Looked up at send time, once per invocation, when the parameters carry
/// no explicit from/reply-to address.
pub trait SiteDefaultSender: Send + Sync {
    /// The configured default sender.
    fn default_sender(&self) -> Address;
}

impl SiteDefaultSender for SiteConfig {
    fn default_sender(&self) -> Address {
        self.mail.clone()
    }
}
