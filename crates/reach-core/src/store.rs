//! The `AnalysisStore` trait.
//!
//! Implemented by storage backends (e.g. `reach-store-sqlite`). The API layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::analysis::{AnalysisRecord, NewAnalysis};

/// Abstraction over the keyed collection of analysis records.
///
/// Records are append-only. Deletion by id is the only mutation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait AnalysisStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record and return it. `id` and `created_at` are set by
  /// the store.
  fn append(
    &self,
    input: NewAnalysis,
  ) -> impl Future<Output = Result<AnalysisRecord, Self::Error>> + Send + '_;

  /// All records, newest first.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<AnalysisRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<AnalysisRecord>, Self::Error>> + Send + '_;

  /// Remove exactly the record with `id`. Returns `false` if there was none.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
