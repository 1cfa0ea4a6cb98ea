use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::model::{DispatchResult, WaitlistRequest};
use crate::{
  config::AppConfig,
  email::{templates, Brand, EmailTransport, MessageKind, OutgoingEmail, TransportError},
  utils::error::INVALID_EMAIL_MESSAGE,
};

#[derive(Debug)]
pub enum WaitlistServiceError {
  ValidationError(String),
  SendFailure(Vec<String>),
  InternalServerError(String),
}

impl Error for WaitlistServiceError {}

impl std::fmt::Display for WaitlistServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      WaitlistServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      WaitlistServiceError::SendFailure(errors) => write!(f, "Send Failure: {}", errors.join("; ")),
      WaitlistServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait WaitlistService: Send + Sync {
  async fn join_waitlist(&self, req: WaitlistRequest) -> Result<DispatchResult, WaitlistServiceError>;
  async fn dispatch(&self, email: &str) -> DispatchResult;
  async fn send_welcome_email(&self, email: &str) -> Result<(), TransportError>;
  async fn send_admin_notification(&self, email: &str) -> Result<(), TransportError>;
}

pub struct WaitlistServiceImpl {
  transport: Arc<dyn EmailTransport>,
  brand: Brand,
  admin_email: String,
  from_email: String,
}

impl WaitlistServiceImpl {
  pub fn new(transport: Arc<dyn EmailTransport>, brand: Brand, admin_email: String, from_email: String) -> Self {
    Self {
      transport,
      brand,
      admin_email,
      from_email,
    }
  }

  pub fn from_config(config: &AppConfig, transport: Arc<dyn EmailTransport>) -> Self {
    Self::new(
      transport,
      config.brand.clone(),
      config.admin_email.clone(),
      config.smtp.from_email.clone(),
    )
  }

  fn sender(&self, display_name: &str) -> String {
    format!("\"{}\" <{}>", display_name, self.from_email)
  }
}

#[async_trait]
impl WaitlistService for WaitlistServiceImpl {
  async fn join_waitlist(&self, req: WaitlistRequest) -> Result<DispatchResult, WaitlistServiceError> {
    req.validate().map_err(|e| {
      tracing::debug!("Rejected waitlist signup: {}", e);
      WaitlistServiceError::ValidationError(INVALID_EMAIL_MESSAGE.to_string())
    })?;

    let result = self.dispatch(&req.email).await;
    if !result.success {
      return Err(WaitlistServiceError::SendFailure(result.errors.unwrap_or_default()));
    }

    Ok(result)
  }

  #[tracing::instrument(name = "waitlist_dispatch", skip(self, email), fields(signup_id = %Uuid::new_v4()))]
  async fn dispatch(&self, email: &str) -> DispatchResult {
    tracing::debug!(transport = %self.transport.kind(), "Dispatching waitlist emails");
    let mut errors = Vec::new();

    let user_email_sent = match self.send_welcome_email(email).await {
      Ok(()) => true,
      Err(e) => {
        tracing::error!("Failed to send welcome email: {}", e);
        errors.push(format!("User email failed: {}", e));
        false
      }
    };

    let admin_email_sent = match self.send_admin_notification(email).await {
      Ok(()) => true,
      Err(e) => {
        tracing::error!("Failed to send admin notification: {}", e);
        errors.push(format!("Admin email failed: {}", e));
        false
      }
    };

    DispatchResult::new(user_email_sent, admin_email_sent, errors)
  }

  async fn send_welcome_email(&self, email: &str) -> Result<(), TransportError> {
    let rendered = templates::render(MessageKind::Welcome, &self.brand, email, Utc::now());
    let outgoing = OutgoingEmail::new(self.sender(&self.brand.name), email.to_string(), rendered);

    self.transport.send(&outgoing).await?;
    tracing::info!("Welcome email sent to {}", email);
    Ok(())
  }

  async fn send_admin_notification(&self, email: &str) -> Result<(), TransportError> {
    let rendered = templates::render(MessageKind::AdminNotice, &self.brand, email, Utc::now());
    let system_name = format!("{} System", self.brand.name);
    let outgoing = OutgoingEmail::new(self.sender(&system_name), self.admin_email.clone(), rendered);

    self.transport.send(&outgoing).await?;
    tracing::info!("Admin notification sent to {}", self.admin_email);
    Ok(())
  }
}
