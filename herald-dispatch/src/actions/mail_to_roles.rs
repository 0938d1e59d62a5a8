//! Broadcast one email per member of the given roles.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, warn};

use herald_common::{Address, AddressList};

use crate::{
    action::Action,
    actions::MAIL_KEY_PREFIX,
    cancel::CancelToken,
    error::{ActionError, ValidationError},
    notify::Notifier,
    outcome::{DispatchReport, SendOutcome},
    params::ActionParameters,
    resolver::RecipientResolver,
    schema::{ParameterKind, ParameterSchema, ParameterSpec},
    site::SiteDefaultSender,
    transport::{MailTransport, OutboundMessage},
};

/// The broadcast action: resolves the given role ids to their members and
/// sends one message per member, sequentially, in resolver order.
///
/// Per-recipient outcome handling:
/// - `Delivered`: counted, loop continues
/// - `SoftFailed`: that recipient is skipped, loop continues
/// - `HardFailed`: the transport is down; the remaining recipients are not
///   attempted and the report is marked aborted. Deliveries that already
///   happened stand.
///
/// Exactly one success notice is emitted, naming the role ids (not the
/// individual members), and only when at least one send was delivered.
pub struct MailToRoles {
    transport: Arc<dyn MailTransport>,
    resolver: Arc<dyn RecipientResolver>,
    site: Arc<dyn SiteDefaultSender>,
    notifier: Arc<dyn Notifier>,
}

impl MailToRoles {
    /// Stable action id.
    pub const ID: &'static str = "herald.mail_to_roles";

    /// Wire up the action with its collaborators.
    #[must_use]
    pub fn new(
        transport: Arc<dyn MailTransport>,
        resolver: Arc<dyn RecipientResolver>,
        site: Arc<dyn SiteDefaultSender>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            resolver,
            site,
            notifier,
        }
    }

    /// Run the broadcast, checking `token` between sends.
    ///
    /// A cancelled invocation stops issuing sends and returns the partial
    /// report accumulated so far; it is not an error and not an abort.
    ///
    /// # Errors
    /// Returns [`ActionError`] for bad input or a resolution backend
    /// failure; transport-level failures are folded into the report.
    pub async fn execute_with(
        &self,
        params: &ActionParameters,
        token: &CancelToken,
    ) -> Result<DispatchReport, ActionError> {
        if params.recipients.is_empty() {
            return Err(ValidationError::NoRecipients.into());
        }
        if params.subject.is_empty() {
            return Err(ValidationError::EmptySubject.into());
        }

        let from = match &params.from {
            Some(from) => Address::parse(from).map_err(ValidationError::from)?,
            None => self.site.default_sender(),
        };

        // Role ids that no longer resolve contribute nothing; the resolver
        // only errors on backend failure.
        let recipients = self.resolver.resolve(&params.recipients).await?;
        if recipients.is_empty() {
            debug!(roles = ?params.recipients, "No recipients resolved, nothing to send");
            return Ok(DispatchReport::empty());
        }

        let mut report = DispatchReport::empty();

        for recipient in recipients {
            if token.is_cancelled() {
                debug!(
                    delivered = report.delivered,
                    attempted = report.attempted,
                    "Broadcast cancelled, returning partial report"
                );
                break;
            }

            let locale = params
                .locale
                .clone()
                .unwrap_or_else(|| recipient.preferred_locale.clone());
            let message = OutboundMessage {
                key: format!("{MAIL_KEY_PREFIX}{}", Self::ID),
                to: AddressList(vec![recipient.address.clone()]),
                subject: params.subject.clone(),
                body: params.body.clone(),
                locale,
                from: from.clone(),
            };

            match self.transport.send(&message).await {
                SendOutcome::Delivered => report.record_delivered(),
                SendOutcome::SoftFailed => {
                    debug!(
                        recipient = %recipient.address,
                        "Send refused for this recipient, continuing with the rest"
                    );
                    report.record_soft_failure(recipient.address);
                }
                SendOutcome::HardFailed => {
                    warn!(
                        recipient = %recipient.address,
                        attempted = report.attempted + 1,
                        "Transport unavailable, aborting the remaining sends"
                    );
                    report.record_hard_failure(recipient.address);
                    break;
                }
            }
        }

        if report.delivered > 0 {
            let roles = params.recipients.join(", ");
            let mut context = BTreeMap::new();
            context.insert("action".to_string(), Self::ID.to_string());
            context.insert("roles".to_string(), roles.clone());
            self.notifier.notice(
                &format!("Successfully sent email to the role(s) {roles}"),
                &context,
            );
        }

        Ok(report)
    }
}

#[async_trait]
impl Action for MailToRoles {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Sends an email to the users of a role"
    }

    fn schema(&self) -> ParameterSchema {
        ParameterSchema::builder()
            .parameter(
                ParameterSpec::new("recipients", "Roles", ParameterKind::Role)
                    .description("The roles to which to send the email.")
                    .multiple(),
            )
            .parameter(
                ParameterSpec::new("subject", "Subject", ParameterKind::String)
                    .description("The subject of the email."),
            )
            .parameter(
                ParameterSpec::new("body", "Body", ParameterKind::Text)
                    .description("The body of the email."),
            )
            .parameter(
                ParameterSpec::new("from", "From", ParameterKind::Email)
                    .description("The from email address. Leave it empty to use the site-wide \
                         configured address.")
                    .optional(),
            )
            .parameter(
                ParameterSpec::new("locale", "Language", ParameterKind::Language)
                    .description("If specified, overrides each recipient's preferred language.")
                    .optional(),
            )
    }

    async fn execute(&self, params: &ActionParameters) -> Result<DispatchReport, ActionError> {
        self.execute_with(params, &CancelToken::new()).await
    }
}
