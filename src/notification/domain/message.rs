//! Notification payloads before and after rendering.

use crate::identity::domain::EmailAddress;

/// Human-readable message addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    recipient: EmailAddress,
    subject: String,
    body: String,
}

impl Notification {
    /// Creates a notification with a plain-text body.
    #[must_use]
    pub fn new(recipient: EmailAddress, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the plain-text body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Rendered message handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Recipient address.
    pub recipient: EmailAddress,
    /// Subject line.
    pub subject: String,
    /// Plain-text alternative.
    pub plain_text: String,
    /// HTML alternative wrapping the plain text.
    pub html_body: String,
}
