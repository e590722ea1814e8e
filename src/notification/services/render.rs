//! HTML rendering of plain-text notifications.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::notification::domain::{Notification, OutboundMessage};

const TEMPLATE_NAME: &str = "notification.html";

const TEMPLATE: &str = r#"<div style="font-family: Arial, sans-serif; padding: 20px; border: 1px solid #ddd;">
  <h2 style="color: #00b7ff;">{{ studio }} - Notification</h2>
  <p>Hello,</p>
{%- for line in lines %}
  <p>{{ line }}</p>
{%- endfor %}
  <hr/>
  <small style="color: #888;">Automated message from the tracker.</small>
</div>
"#;

/// Error returned when the HTML alternative cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("notification template failed to render: {0}")]
pub struct RenderError(pub String);

/// Wraps notification text in the studio's fixed HTML template.
pub struct NotificationRenderer {
    environment: Environment<'static>,
    studio_name: String,
}

impl NotificationRenderer {
    /// Creates a renderer that signs messages with `studio_name`.
    #[must_use]
    pub fn new(studio_name: impl Into<String>) -> Self {
        Self {
            environment: Environment::new(),
            studio_name: studio_name.into(),
        }
    }

    /// Renders a notification into a transport-ready message.
    ///
    /// Body text is HTML-escaped; each non-blank line becomes a paragraph.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when template evaluation fails.
    pub fn render(&self, notification: &Notification) -> Result<OutboundMessage, RenderError> {
        let lines: Vec<&str> = notification
            .body()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let html_body = self
            .environment
            .render_named_str(
                TEMPLATE_NAME,
                TEMPLATE,
                context! { studio => self.studio_name.as_str(), lines => lines },
            )
            .map_err(|err| RenderError(err.to_string()))?;

        Ok(OutboundMessage {
            recipient: notification.recipient().clone(),
            subject: notification.subject().to_owned(),
            plain_text: notification.body().to_owned(),
            html_body,
        })
    }
}
