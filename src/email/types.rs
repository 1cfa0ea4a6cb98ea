#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl SmtpConfig {
  /// SMTP delivery needs both credentials; anything less falls back to the log transport.
  pub fn has_credentials(&self) -> bool {
    !self.username.is_empty() && !self.password.is_empty()
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
  pub subject: String,
  pub html: String,
  pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
  /// Mailbox string, e.g. `DesignBell <hello@designbell.com>`.
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
  pub text: String,
}

impl OutgoingEmail {
  pub fn new(from: String, to: String, rendered: RenderedEmail) -> Self {
    OutgoingEmail {
      from,
      to,
      subject: rendered.subject,
      html: rendered.html,
      text: rendered.text,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
  InvalidAddress(String),
  Build(String),
  Smtp(String),
}

impl std::error::Error for TransportError {}

impl std::fmt::Display for TransportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TransportError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      TransportError::Build(msg) => write!(f, "Failed to build message: {}", msg),
      TransportError::Smtp(msg) => write!(f, "SMTP error: {}", msg),
    }
  }
}
