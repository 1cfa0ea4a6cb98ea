use async_trait::async_trait;

use super::{
  transport::{EmailTransport, TransportKind},
  types::{OutgoingEmail, TransportError},
};

/// Stand-in transport for environments without SMTP credentials.
#[derive(Debug, Default, Clone)]
pub struct LogTransport;

impl LogTransport {
  pub fn new() -> Self {
    LogTransport
  }
}

#[async_trait]
impl EmailTransport for LogTransport {
  fn kind(&self) -> TransportKind {
    TransportKind::Log
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError> {
    tracing::info!(to = %email.to, from = %email.from, subject = %email.subject, "Email would be sent");
    tracing::debug!(to = %email.to, "Text body:\n{}", email.text);
    Ok(())
  }
}
