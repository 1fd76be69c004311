use super::{DeliveryReceipt, EmailMessage, EmailProvider, ProviderError};
use crate::config::{SmtpConfig, SmtpCredentials};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;

/// Authenticated STARTTLS relay; the login doubles as the sender address.
pub struct SmtpProvider {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
    pub fn new(config: &SmtpConfig, credentials: &SmtpCredentials) -> Result<Self, ProviderError> {
        let address: Address = credentials.user.parse().map_err(|e| {
            ProviderError::Configuration(format!("Invalid sender address: {}", e))
        })?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let creds = Credentials::new(
            credentials.user.clone(),
            credentials.password.expose_secret().clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create SMTP relay: {}", e))
            })?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: &EmailMessage) -> Result<Message, ProviderError> {
        let to_mailbox: Mailbox = email
            .to
            .parse()
            .map_err(|e| ProviderError::InvalidRecipient(format!("{}: {}", email.to, e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.body_html.clone())
            .map_err(|e| ProviderError::SendFailed(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailMessage) -> Result<DeliveryReceipt, ProviderError> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| ProviderError::SendFailed(format!("Failed to send email: {}", e)))?;

        let provider_id = response.message().next().map(|s| s.to_string());

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Email sent successfully"
        );

        Ok(DeliveryReceipt { provider_id })
    }
}
