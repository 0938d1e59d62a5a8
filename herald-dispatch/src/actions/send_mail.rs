//! Send one email to an explicit list of recipients.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tracing::debug;

use herald_common::{Address, AddressList};

use crate::{
    action::Action,
    actions::{DEFAULT_LOCALE, MAIL_KEY_PREFIX},
    error::{ActionError, ValidationError},
    notify::Notifier,
    outcome::{DispatchReport, SendOutcome},
    params::ActionParameters,
    schema::{ParameterKind, ParameterSchema, ParameterSpec},
    site::SiteDefaultSender,
    transport::{MailTransport, OutboundMessage},
};

/// The single-send action: validates its parameters, issues exactly one
/// transport call addressed to the full recipient list, and reports the
/// outcome.
///
/// Emits exactly one success notice when the transport delivers, and none
/// otherwise; failures surface only through the returned report.
pub struct SendMail {
    transport: Arc<dyn MailTransport>,
    site: Arc<dyn SiteDefaultSender>,
    notifier: Arc<dyn Notifier>,
}

impl SendMail {
    /// Stable action id.
    pub const ID: &'static str = "herald.send_mail";

    /// Wire up the action with its collaborators.
    #[must_use]
    pub fn new(
        transport: Arc<dyn MailTransport>,
        site: Arc<dyn SiteDefaultSender>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            site,
            notifier,
        }
    }
}

#[async_trait]
impl Action for SendMail {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Send email"
    }

    fn schema(&self) -> ParameterSchema {
        ParameterSchema::builder()
            .parameter(
                ParameterSpec::new("recipients", "Send to", ParameterKind::Email)
                    .description("Email address(es) to send the message to.")
                    .multiple(),
            )
            .parameter(
                ParameterSpec::new("subject", "Subject", ParameterKind::String)
                    .description("The email's subject."),
            )
            .parameter(
                ParameterSpec::new("body", "Message", ParameterKind::Text)
                    .description("The email's message body."),
            )
            .parameter(
                ParameterSpec::new("reply_to", "Reply to", ParameterKind::Email)
                    .description(
                        "The mail's reply-to address. Leave it empty to use the site-wide \
                         configured address.",
                    )
                    .optional(),
            )
            .parameter(
                ParameterSpec::new("locale", "Language", ParameterKind::Language)
                    .description("If specified, the language used for the mail.")
                    .optional(),
            )
    }

    async fn execute(&self, params: &ActionParameters) -> Result<DispatchReport, ActionError> {
        if params.recipients.is_empty() {
            return Err(ValidationError::NoRecipients.into());
        }
        if params.subject.is_empty() {
            return Err(ValidationError::EmptySubject.into());
        }

        let to = AddressList::parse(&params.recipients).map_err(ValidationError::from)?;
        let from = match &params.reply_to {
            Some(reply_to) => Address::parse(reply_to).map_err(ValidationError::from)?,
            None => self.site.default_sender(),
        };
        let locale = params
            .locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let message = OutboundMessage {
            key: format!("{MAIL_KEY_PREFIX}{}", Self::ID),
            to: to.clone(),
            subject: params.subject.clone(),
            body: params.body.clone(),
            locale,
            from,
        };

        let mut report = DispatchReport::empty();
        report.attempted = 1;

        match self.transport.send(&message).await {
            SendOutcome::Delivered => {
                report.delivered = 1;

                let mut context = BTreeMap::new();
                context.insert("action".to_string(), Self::ID.to_string());
                context.insert("recipients".to_string(), to.to_string());
                self.notifier
                    .notice(&format!("Successfully sent email to {to}"), &context);
            }
            SendOutcome::SoftFailed => {
                debug!(recipients = %to, "Transport refused the message");
                report.failed_recipients = to.0;
            }
            SendOutcome::HardFailed => {
                debug!(recipients = %to, "Transport unavailable");
                report.aborted = true;
                report.failed_recipients = to.0;
            }
        }

        Ok(report)
    }
}
