//! JSON REST API for Reach.
//!
//! Exposes an axum [`Router`] backed by any
//! [`reach_core::store::AnalysisStore`] and a
//! [`reach_gateway::CompletionGateway`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", reach_api::api_router(state))
//! ```

pub mod analyze;
pub mod error;
pub mod history;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use reach_core::store::AnalysisStore;
use reach_gateway::CompletionGateway;

pub use analyze::{WriteFailureHook, log_write_failure};
pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub store:            Arc<S>,
  pub gateway:          Arc<CompletionGateway>,
  /// Receives errors from best-effort record writes.
  pub on_write_failure: WriteFailureHook,
}

impl<S> AppState<S> {
  /// State with the default, logging write-failure hook.
  pub fn new(store: Arc<S>, gateway: CompletionGateway) -> Self {
    Self {
      store,
      gateway: Arc::new(gateway),
      on_write_failure: log_write_failure(),
    }
  }

  pub fn with_write_failure_hook(mut self, hook: WriteFailureHook) -> Self {
    self.on_write_failure = hook;
    self
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:            self.store.clone(),
      gateway:          self.gateway.clone(),
      on_write_failure: self.on_write_failure.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: AnalysisStore + 'static,
{
  Router::new()
    .route("/analyze", post(analyze::handler::<S>))
    .route("/analyses", get(history::list::<S>))
    .route(
      "/analyses/{id}",
      get(history::get_one::<S>).delete(history::delete_one::<S>),
    )
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
