use async_trait::async_trait;
use serde::Deserialize;

use crate::domains::waitlist::model::WaitlistRequest;

/// Reply body of `POST /api/waitlist`, covering both the success and failure shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupReply {
  pub success: bool,
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub user_email_sent: Option<bool>,
  #[serde(default)]
  pub admin_email_sent: Option<bool>,
  #[serde(default)]
  pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
  Network(String),
  Decode(String),
}

impl std::error::Error for ClientError {}

impl std::fmt::Display for ClientError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ClientError::Network(msg) => write!(f, "Network error: {}", msg),
      ClientError::Decode(msg) => write!(f, "Invalid response: {}", msg),
    }
  }
}

#[async_trait]
pub trait WaitlistClient: Send + Sync {
  async fn join(&self, email: &str) -> Result<SignupReply, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpWaitlistClient {
  base_url: String,
  http: reqwest::Client,
}

impl HttpWaitlistClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(base_url, reqwest::Client::new())
  }

  pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { base_url, http }
  }

  pub fn endpoint(&self) -> String {
    format!("{}/api/waitlist", self.base_url)
  }
}

#[async_trait]
impl WaitlistClient for HttpWaitlistClient {
  // Error statuses still carry a JSON body worth surfacing, so the status code is not checked.
  async fn join(&self, email: &str) -> Result<SignupReply, ClientError> {
    let response = self
      .http
      .post(self.endpoint())
      .json(&WaitlistRequest::new(email))
      .send()
      .await
      .map_err(|e| ClientError::Network(e.to_string()))?;

    response
      .json::<SignupReply>()
      .await
      .map_err(|e| ClientError::Decode(e.to_string()))
  }
}
