//! Handler for `POST /analyze`, the submission endpoint.
//!
//! The response is decided by the gateway alone. Persisting the record is a
//! best-effort side channel: its failures go to the state's
//! [`WriteFailureHook`] and never reach the caller.

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use reach_core::{
  analysis::{EmojiLevel, NewAnalysis},
  store::AnalysisStore,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

// ─── Write-failure hook ──────────────────────────────────────────────────────

/// A store error as seen by a [`WriteFailureHook`].
pub type StoreError = dyn std::error::Error + Send + Sync + 'static;

/// Observer for failed best-effort writes.
pub type WriteFailureHook = Arc<dyn Fn(&StoreError) + Send + Sync>;

/// The default hook: log the failure at `error` level.
pub fn log_write_failure() -> WriteFailureHook {
  Arc::new(|err: &StoreError| {
    tracing::error!(error = %err, "failed to persist analysis record");
  })
}

/// Append `input`, handing any failure to the hook. Never fails, never
/// retries.
async fn persist_best_effort<S>(state: &AppState<S>, input: NewAnalysis)
where
  S: AnalysisStore,
{
  match state.store.append(input).await {
    Ok(record) => tracing::debug!(id = %record.id, "analysis record stored"),
    Err(err) => {
      let err: &StoreError = &err;
      (state.on_write_failure)(err);
    }
  }
}

// ─── Handler ─────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
  pub text:        String,
  pub tone:        String,
  pub emoji_level: EmojiLevel,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
  pub analysis: String,
}

/// `POST /analyze`, body: `{"text":"...","tone":"...","emoji_level":0}`
///
/// Returns `{"analysis": ...}` whenever the gateway produced text, including
/// stringified upstream failures. Returns 500 `{"error": ...}` only when the
/// gateway could not run at all. A body that does not parse is answered
/// with the extractor's status and an `{"error": ...}` body.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError>
where
  S: AnalysisStore,
{
  let Json(body) = body?;

  tracing::info!(
    tone = %body.tone,
    emoji_level = body.emoji_level.level(),
    text_len = body.text.len(),
    "analyze called"
  );

  let analysis = state
    .gateway
    .analyze(&body.text, &body.tone, body.emoji_level.label())
    .await
    .inspect_err(|err| {
      if err.is_configuration() {
        tracing::error!(error = %err, "analyze failed: gateway misconfigured");
      } else {
        tracing::warn!(error = %err, "analyze failed: completion endpoint unreachable");
      }
    })?;

  let response = AnalyzeResponse { analysis: analysis.clone() };

  persist_best_effort(
    &state,
    NewAnalysis::new(body.text, body.tone, body.emoji_level, analysis),
  )
  .await;

  Ok(Json(response))
}
