use std::any::Any;

use axum::{
  http::{HeaderValue, Method},
  response::{IntoResponse, Json as JsonResponse, Response},
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::{
  catch_panic::CatchPanicLayer,
  cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  domains::waitlist::rest::waitlist_routes,
  state::SharedAppState,
  utils::error::{AppError, INTERNAL_ERROR_MESSAGE},
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api", waitlist_routes())
    .layer(CatchPanicLayer::custom(handle_panic))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// CORS policy for the marketing site; an empty list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = allowed_origins
    .iter()
    .filter_map(|origin| match origin.parse() {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
        None
      }
    })
    .collect();

  let allow_origin = if origins.is_empty() {
    AllowOrigin::from(AnyOrigin)
  } else {
    AllowOrigin::list(origins)
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_methods([Method::GET, Method::POST])
    .allow_headers([axum::http::header::CONTENT_TYPE])
}

pub async fn health_handler() -> JsonResponse<Value> {
  JsonResponse(json!({ "status": "ok" }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    s.to_string()
  } else {
    "unknown panic".to_string()
  };
  tracing::error!("Handler panicked: {}", detail);

  AppError::internal_server_error(INTERNAL_ERROR_MESSAGE).into_response()
}
