//! Mock collaborators for action tests
#![allow(dead_code)] // Test utility module - not all helpers used in every test

use std::{
    collections::{BTreeMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;

use herald_dispatch::{
    Address, MailTransport, Notifier, OutboundMessage, Recipient, RecipientResolver,
    ResolutionError, SendOutcome, SiteDefaultSender,
};

pub fn addr(s: &str) -> Address {
    Address::parse(s).unwrap()
}

/// Transport that replays a scripted sequence of outcomes and records every
/// message it was handed. Once the script is exhausted it keeps delivering.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<Vec<SendOutcome>>,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl ScriptedTransport {
    pub fn always_delivered() -> Self {
        Self::default()
    }

    pub fn with_script(outcomes: impl IntoIterator<Item = SendOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every message handed to the transport, in send order.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for ScriptedTransport {
    async fn send(&self, message: &OutboundMessage) -> SendOutcome {
        self.sent.lock().unwrap().push(message.clone());
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            SendOutcome::Delivered
        } else {
            script.remove(0)
        }
    }
}

/// Resolver backed by a fixed role -> members table.
///
/// Members are returned in declaration order; an address appearing in more
/// than one requested role is returned once (first occurrence wins), the
/// deduplication contract real resolvers carry.
#[derive(Debug, Default)]
pub struct StaticResolver {
    roles: Vec<(String, Vec<Recipient>)>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn role(
        mut self,
        id: impl Into<String>,
        members: impl IntoIterator<Item = Recipient>,
    ) -> Self {
        self.roles
            .push((id.into(), members.into_iter().collect()));
        self
    }
}

#[async_trait]
impl RecipientResolver for StaticResolver {
    async fn resolve(&self, role_ids: &[String]) -> Result<Vec<Recipient>, ResolutionError> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (role, members) in &self.roles {
            if !role_ids.contains(role) {
                continue;
            }
            for member in members {
                if seen.insert(member.address.clone()) {
                    out.push(member.clone());
                }
            }
        }
        Ok(out)
    }
}

/// Resolver whose backend is down.
#[derive(Debug, Default)]
pub struct FailingResolver;

#[async_trait]
impl RecipientResolver for FailingResolver {
    async fn resolve(&self, _role_ids: &[String]) -> Result<Vec<Recipient>, ResolutionError> {
        Err(ResolutionError::Backend(
            "membership store offline".to_string(),
        ))
    }
}

/// Notifier that records every notice for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(String, BTreeMap<String, String>)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(String, BTreeMap<String, String>)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str, context: &BTreeMap<String, String>) {
        self.notices
            .lock()
            .unwrap()
            .push((message.to_string(), context.clone()));
    }
}

/// Fixed site default sender.
#[derive(Debug)]
pub struct StaticSender(pub Address);

impl SiteDefaultSender for StaticSender {
    fn default_sender(&self) -> Address {
        self.0.clone()
    }
}
