use async_trait::async_trait;
use lettre::{
  message::{Mailbox, MultiPart},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{
  transport::{EmailTransport, TransportKind},
  types::{OutgoingEmail, SmtpConfig, TransportError},
};

pub struct SmtpTransport {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
  pub fn new(smtp_config: SmtpConfig) -> anyhow::Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpTransport {
      smtp_config,
      transporter,
    })
  }

  fn build_message(email: &OutgoingEmail) -> Result<Message, TransportError> {
    let from: Mailbox = email
      .from
      .parse()
      .map_err(|e| TransportError::InvalidAddress(format!("{}: {}", email.from, e)))?;
    let to: Mailbox = email
      .to
      .parse()
      .map_err(|e| TransportError::InvalidAddress(format!("{}: {}", email.to, e)))?;

    Message::builder()
      .from(from)
      .to(to)
      .subject(&email.subject)
      .multipart(MultiPart::alternative_plain_html(email.text.clone(), email.html.clone()))
      .map_err(|e| TransportError::Build(e.to_string()))
  }
}

#[async_trait]
impl EmailTransport for SmtpTransport {
  fn kind(&self) -> TransportKind {
    TransportKind::Smtp
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError> {
    let message = Self::build_message(email)?;

    self
      .transporter
      .send(message)
      .await
      .map_err(|e| TransportError::Smtp(e.to_string()))?;

    tracing::info!(to = %email.to, host = %self.smtp_config.host, "Email sent");
    Ok(())
  }
}
