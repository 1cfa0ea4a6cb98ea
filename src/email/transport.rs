use std::sync::Arc;

use async_trait::async_trait;

use super::{
  mock::LogTransport,
  smtp::SmtpTransport,
  types::{OutgoingEmail, SmtpConfig, TransportError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
  Log,
  Smtp,
}

impl TransportKind {
  pub fn select(config: &SmtpConfig) -> Self {
    if config.has_credentials() {
      TransportKind::Smtp
    } else {
      TransportKind::Log
    }
  }
}

impl std::fmt::Display for TransportKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TransportKind::Log => write!(f, "log"),
      TransportKind::Smtp => write!(f, "smtp"),
    }
  }
}

#[async_trait]
pub trait EmailTransport: Send + Sync {
  fn kind(&self) -> TransportKind;
  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError>;
}

/// Builds the transport once at startup; handlers only ever see the trait object.
pub fn build_transport(config: &SmtpConfig) -> anyhow::Result<Arc<dyn EmailTransport>> {
  let transport: Arc<dyn EmailTransport> = match TransportKind::select(config) {
    TransportKind::Smtp => Arc::new(SmtpTransport::new(config.clone())?),
    TransportKind::Log => Arc::new(LogTransport::new()),
  };

  tracing::info!(transport = %transport.kind(), "Email transport ready");
  Ok(transport)
}
