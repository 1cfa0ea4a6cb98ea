#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use waitlist_api::{
  app::create_app,
  config::AppConfig,
  email::{EmailTransport, OutgoingEmail, TransportError, TransportKind},
  state::SharedAppState,
};

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
  Succeed,
  Fail,
  FailFirst,
}

/// Records every message and answers according to `behaviour`.
pub struct StubTransport {
  behaviour: Behaviour,
  sent: Mutex<Vec<OutgoingEmail>>,
}

impl StubTransport {
  pub fn new(behaviour: Behaviour) -> Arc<Self> {
    Arc::new(Self {
      behaviour,
      sent: Mutex::new(Vec::new()),
    })
  }

  pub fn sent(&self) -> Vec<OutgoingEmail> {
    self.sent.lock().unwrap().clone()
  }
}

#[async_trait]
impl EmailTransport for StubTransport {
  fn kind(&self) -> TransportKind {
    TransportKind::Log
  }

  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError> {
    let attempt = {
      let mut sent = self.sent.lock().unwrap();
      sent.push(email.clone());
      sent.len()
    };

    match self.behaviour {
      Behaviour::Succeed => Ok(()),
      Behaviour::Fail => Err(TransportError::Smtp("connection refused".to_string())),
      Behaviour::FailFirst if attempt == 1 => Err(TransportError::Smtp("mailbox unavailable".to_string())),
      Behaviour::FailFirst => Ok(()),
    }
  }
}

pub fn test_config() -> AppConfig {
  let mut config = AppConfig {
    admin_email: "admin@example.com".to_string(),
    ..AppConfig::default()
  };
  config.smtp.from_email = "hello@example.com".to_string();
  config
}

pub fn app_with(transport: Arc<StubTransport>) -> Router {
  let state = SharedAppState::new(&test_config(), transport);
  create_app(state)
}
