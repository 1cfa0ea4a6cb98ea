use axum::{
  extract::rejection::BytesRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::{error::Category, json};

pub const INVALID_EMAIL_MESSAGE: &str = "Valid email is required";
pub const SEND_FAILURE_MESSAGE: &str = "Failed to send emails";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub errors: Option<Vec<String>>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      errors: None,
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn with_errors(mut self, errors: Vec<String>) -> Self {
    self.errors = if errors.is_empty() { None } else { Some(errors) };
    self
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = match self.errors {
      Some(errors) => json!({
        "success": false,
        "message": self.message,
        "errors": errors,
      }),
      None => json!({
        "success": false,
        "message": self.message,
      }),
    };

    (self.status_code, Json(body)).into_response()
  }
}

impl From<BytesRejection> for AppError {
  fn from(rejection: BytesRejection) -> Self {
    tracing::error!("Failed to read request body: {:?}", rejection);
    AppError::internal_server_error(INTERNAL_ERROR_MESSAGE)
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    match error.classify() {
      Category::Data => {
        tracing::debug!("Rejected waitlist payload: {}", error);
        AppError::bad_request(INVALID_EMAIL_MESSAGE)
      }
      Category::Syntax | Category::Eof | Category::Io => {
        tracing::error!("Failed to parse request body: {}", error);
        AppError::internal_server_error(INTERNAL_ERROR_MESSAGE)
      }
    }
  }
}

impl From<crate::domains::waitlist::service::WaitlistServiceError> for AppError {
  fn from(error: crate::domains::waitlist::service::WaitlistServiceError) -> Self {
    use crate::domains::waitlist::service::WaitlistServiceError;
    match error {
      WaitlistServiceError::ValidationError(msg) => AppError::bad_request(msg),
      WaitlistServiceError::SendFailure(errors) => {
        AppError::internal_server_error(SEND_FAILURE_MESSAGE).with_errors(errors)
      }
      WaitlistServiceError::InternalServerError(msg) => {
        tracing::error!("Waitlist signup failed: {}", msg);
        AppError::internal_server_error(INTERNAL_ERROR_MESSAGE)
      }
    }
  }
}
