use axum::{
  body::Bytes,
  extract::{rejection::BytesRejection, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{WaitlistRequest, WaitlistResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn waitlist_routes() -> Router<SharedAppState> {
  Router::new().route("/waitlist", post(join_waitlist_handler))
}

/// Reads the body as JSON whatever its `Content-Type`.
pub async fn join_waitlist_handler(
  State(state): State<SharedAppState>,
  body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse<WaitlistResponse>, AppError> {
  let payload: WaitlistRequest = serde_json::from_slice(&body?)?;

  state
    .join_waitlist(payload)
    .await
    .map(|result| JsonResponse(WaitlistResponse::from(result)))
    .map_err(Into::into)
}
