use serde::{Deserialize, Serialize};
use validator::Validate;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Welcome email sent! Check your inbox.";

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct WaitlistRequest {
  #[serde(default)]
  #[validate(
    length(min = 1, message = "Valid email is required"),
    custom(function = "crate::utils::validate_email")
  )]
  pub email: String,
}

impl WaitlistRequest {
  pub fn new(email: impl Into<String>) -> Self {
    Self { email: email.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
  pub success: bool,
  pub user_email_sent: bool,
  pub admin_email_sent: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub errors: Option<Vec<String>>,
}

impl DispatchResult {
  pub fn new(user_email_sent: bool, admin_email_sent: bool, errors: Vec<String>) -> Self {
    Self {
      success: user_email_sent && admin_email_sent,
      user_email_sent,
      admin_email_sent,
      errors: if errors.is_empty() { None } else { Some(errors) },
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistResponse {
  pub success: bool,
  pub message: String,
  pub user_email_sent: bool,
  pub admin_email_sent: bool,
}

impl From<DispatchResult> for WaitlistResponse {
  fn from(result: DispatchResult) -> Self {
    Self {
      success: result.success,
      message: SIGNUP_SUCCESS_MESSAGE.to_string(),
      user_email_sent: result.user_email_sent,
      admin_email_sent: result.admin_email_sent,
    }
  }
}
