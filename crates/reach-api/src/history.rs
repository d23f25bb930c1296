//! Handlers for `/analyses` endpoints backing the history view.
//!
//! | Method   | Path              | Notes                      |
//! |----------|-------------------|----------------------------|
//! | `GET`    | `/analyses`       | Newest first               |
//! | `GET`    | `/analyses/:id`   | 404 if not found           |
//! | `DELETE` | `/analyses/:id`   | 204, or 404 if not found   |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use reach_core::{analysis::AnalysisRecord, store::AnalysisStore};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// `GET /analyses`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<AnalysisRecord>>, ApiError>
where
  S: AnalysisStore,
{
  let records = state
    .store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(records))
}

/// `GET /analyses/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>, ApiError>
where
  S: AnalysisStore,
{
  let record = state
    .store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("analysis {id} not found")))?;
  Ok(Json(record))
}

/// `DELETE /analyses/:id`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: AnalysisStore,
{
  let removed = state
    .store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if !removed {
    return Err(ApiError::NotFound(format!("analysis {id} not found")));
  }
  tracing::info!(%id, "analysis deleted");
  Ok(StatusCode::NO_CONTENT)
}
