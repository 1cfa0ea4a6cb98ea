use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::waitlist::{
    model::{DispatchResult, WaitlistRequest},
    service::{WaitlistService, WaitlistServiceError, WaitlistServiceImpl},
  },
  email::EmailTransport,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn join_waitlist(
    &self,
    req: WaitlistRequest,
  ) -> impl std::future::Future<Output = Result<DispatchResult, WaitlistServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub waitlist_service: Arc<WaitlistServiceImpl>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig, transport: Arc<dyn EmailTransport>) -> Self {
    let waitlist_service = Arc::new(WaitlistServiceImpl::from_config(config, transport));

    Self { waitlist_service }
  }
}

impl AppState for SharedAppState {
  async fn join_waitlist(&self, req: WaitlistRequest) -> Result<DispatchResult, WaitlistServiceError> {
    self.waitlist_service.join_waitlist(req).await
  }
}
