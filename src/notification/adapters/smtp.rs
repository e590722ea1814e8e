//! SMTP transport backed by `lettre`.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpSettings;
use crate::notification::{
    domain::OutboundMessage,
    ports::{MessageTransport, TransportError, TransportResult},
};

/// Implicit-TLS SMTP relay transport.
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpTransport {
    /// Builds a relay transport from settings.
    ///
    /// The configured timeout bounds connection, greeting and socket waits.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Address`] when the sender address is invalid
    /// or [`TransportError::Unavailable`] when the relay cannot be set up.
    pub fn from_settings(settings: &SmtpSettings) -> TransportResult<Self> {
        let address = settings
            .sender_address
            .parse::<Address>()
            .map_err(|err| TransportError::Address(err.to_string()))?;
        let sender = Mailbox::new(Some(settings.sender_name.clone()), address);

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|err| TransportError::Unavailable(err.to_string()))?
            .port(settings.port)
            .timeout(Some(settings.timeout()));
        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            mailer: builder.build(),
            sender,
        })
    }
}

#[async_trait]
impl MessageTransport for SmtpTransport {
    async fn send(&self, message: OutboundMessage) -> TransportResult<()> {
        let OutboundMessage {
            recipient,
            subject,
            plain_text,
            html_body,
        } = message;

        let to = recipient
            .as_str()
            .parse::<Mailbox>()
            .map_err(|err| TransportError::Address(err.to_string()))?;
        let email = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(plain_text, html_body))
            .map_err(TransportError::delivery)?;

        self.mailer
            .send(email)
            .await
            .map_err(TransportError::delivery)?;
        Ok(())
    }
}
