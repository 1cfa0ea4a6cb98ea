use std::time::Duration;

use super::client::{ClientError, SignupReply, WaitlistClient};
use crate::domains::waitlist::model::SIGNUP_SUCCESS_MESSAGE;

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

const MODAL_AUTO_CLOSE: Duration = Duration::from_secs(2);

/// Where the signup form is rendered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
  Hero,
  Footer,
  Modal,
}

impl Placement {
  pub fn auto_close_delay(&self) -> Option<Duration> {
    match self {
      Placement::Modal => Some(MODAL_AUTO_CLOSE),
      Placement::Hero | Placement::Footer => None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
  #[default]
  Idle,
  Pending,
  Success(String),
  Error(String),
}

impl SubmitState {
  pub fn is_pending(&self) -> bool {
    matches!(self, SubmitState::Pending)
  }

  pub fn message(&self) -> Option<&str> {
    match self {
      SubmitState::Success(msg) | SubmitState::Error(msg) => Some(msg),
      SubmitState::Idle | SubmitState::Pending => None,
    }
  }
}

#[derive(Debug, Clone)]
pub struct SignupForm {
  placement: Placement,
  email: String,
  state: SubmitState,
}

impl SignupForm {
  pub fn new(placement: Placement) -> Self {
    Self {
      placement,
      email: String::new(),
      state: SubmitState::Idle,
    }
  }

  pub fn placement(&self) -> Placement {
    self.placement
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  pub fn state(&self) -> &SubmitState {
    &self.state
  }

  pub fn set_email(&mut self, email: impl Into<String>) {
    self.email = email.into();
  }

  pub fn can_submit(&self) -> bool {
    !self.state.is_pending() && !self.email.is_empty()
  }

  /// Moves to `Pending` and hands back the address to post, or `None` if submitting is not allowed.
  pub fn begin(&mut self) -> Option<String> {
    if !self.can_submit() {
      return None;
    }

    self.state = SubmitState::Pending;
    Some(self.email.clone())
  }

  pub fn complete(&mut self, outcome: Result<SignupReply, ClientError>) {
    self.state = match outcome {
      Ok(reply) if reply.success => {
        self.email.clear();
        SubmitState::Success(SIGNUP_SUCCESS_MESSAGE.to_string())
      }
      Ok(reply) => SubmitState::Error(
        reply
          .message
          .filter(|msg| !msg.is_empty())
          .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
      ),
      Err(e) => {
        tracing::warn!("Waitlist signup request failed: {}", e);
        SubmitState::Error(NETWORK_ERROR_MESSAGE.to_string())
      }
    };
  }

  pub async fn submit<C>(&mut self, client: &C) -> &SubmitState
  where
    C: WaitlistClient + ?Sized,
  {
    if let Some(email) = self.begin() {
      let outcome = client.join(&email).await;
      self.complete(outcome);
    }

    &self.state
  }

  pub fn reset(&mut self) {
    self.state = SubmitState::Idle;
  }
}
