use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{EmailTransport, OutgoingEmail, TransportError, TransportKind},
  state::SharedAppState,
};

mockall::mock! {
  pub Transport {}

  #[async_trait]
  impl EmailTransport for Transport {
    fn kind(&self) -> TransportKind;
    async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError>;
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

pub fn succeeding_transport() -> MockTransport {
  let mut transport = MockTransport::new();
  transport.expect_kind().return_const(TransportKind::Log);
  transport.expect_send().returning(|_| Ok(()));
  transport
}

pub fn failing_transport() -> MockTransport {
  let mut transport = MockTransport::new();
  transport.expect_kind().return_const(TransportKind::Smtp);
  transport
    .expect_send()
    .returning(|_| Err(TransportError::Smtp("connection refused".to_string())));
  transport
}

pub fn app_with_transport(transport: impl EmailTransport + 'static) -> Router {
  let transport: Arc<dyn EmailTransport> = Arc::new(transport);
  let state = SharedAppState::new(&test_config(), transport);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  post_with_content_type(app, uri, body, Some("application/json")).await
}

pub async fn post_with_content_type(
  app: Router,
  uri: &str,
  body: &'static str,
  content_type: Option<&str>,
) -> (StatusCode, Bytes) {
  let mut builder = Request::builder().method("POST").uri(uri);
  if let Some(content_type) = content_type {
    builder = builder.header("content-type", content_type);
  }
  let request = builder.body(Body::from(body)).expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
