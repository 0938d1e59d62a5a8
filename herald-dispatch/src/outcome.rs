//! Send outcomes and the per-invocation dispatch report.

use serde::{Deserialize, Serialize};

use herald_common::Address;

/// The three-way result of one transport call.
///
/// This replaces the loose true/false/null result of the original mail
/// plugin API with an explicit tag; the dispatcher never inspects
/// transport-specific error payloads beyond this classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendOutcome {
    /// The transport accepted the message.
    Delivered,

    /// This message was refused (e.g. a rejected mailbox). Specific to one
    /// recipient; further sends may still succeed.
    SoftFailed,

    /// The transport itself is unavailable. No further sends should be
    /// attempted this invocation; transport timeouts classify here.
    HardFailed,
}

/// Aggregate of one action invocation.
///
/// Created fresh per `execute` call and never persisted. Partial failure is
/// not an error: a broadcast where some sends failed still returns a report,
/// with `delivered < attempted` or `aborted` set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    /// Recipients for which the transport was actually invoked. Recipients
    /// skipped after an abort are not counted.
    pub attempted: usize,

    /// Sends the transport accepted.
    pub delivered: usize,

    /// Whether a hard failure stopped the loop before all recipients were
    /// tried. Prior deliveries stand; they are not rolled back.
    pub aborted: bool,

    /// Addresses whose sends failed (soft failures, plus the recipient
    /// whose send hard-failed).
    pub failed_recipients: Vec<Address>,
}

impl DispatchReport {
    /// Report for an invocation that resolved zero recipients.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record a successful delivery.
    pub const fn record_delivered(&mut self) {
        self.attempted += 1;
        self.delivered += 1;
    }

    /// Record a per-recipient soft failure.
    pub fn record_soft_failure(&mut self, recipient: Address) {
        self.attempted += 1;
        self.failed_recipients.push(recipient);
    }

    /// Record a transport-wide hard failure and mark the invocation aborted.
    pub fn record_hard_failure(&mut self, recipient: Address) {
        self.attempted += 1;
        self.aborted = true;
        self.failed_recipients.push(recipient);
    }
}

#[cfg(test)]
mod test {
    use herald_common::Address;
    use pretty_assertions::assert_eq;

    use super::DispatchReport;

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    #[test]
    fn counters_track_outcomes() {
        let mut report = DispatchReport::empty();
        report.record_delivered();
        report.record_soft_failure(addr("a@example.com"));
        report.record_delivered();
        report.record_hard_failure(addr("b@example.com"));

        assert_eq!(report.attempted, 4);
        assert_eq!(report.delivered, 2);
        assert!(report.aborted);
        assert_eq!(report.failed_recipients.len(), 2);
    }

    #[test]
    fn empty_report_is_not_aborted() {
        let report = DispatchReport::empty();
        assert_eq!(report.attempted, 0);
        assert_eq!(report.delivered, 0);
        assert!(!report.aborted);
    }
}
