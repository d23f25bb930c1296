//! [`SqliteStore`], the SQLite implementation of [`AnalysisStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use reach_core::{
  analysis::{AnalysisRecord, NewAnalysis},
  store::AnalysisStore,
};

use crate::{
  encode::{COLUMNS, RawAnalysis, encode_dt, encode_emoji_level, encode_uuid},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An analysis store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── AnalysisStore impl ──────────────────────────────────────────────────────

impl AnalysisStore for SqliteStore {
  type Error = crate::Error;

  async fn append(&self, input: NewAnalysis) -> Result<AnalysisRecord> {
    // Stored at microsecond precision.
    let record = input.into_record(Uuid::new_v4(), Utc::now().trunc_subsecs(6));

    let id_str      = encode_uuid(record.id);
    let text        = record.text.clone();
    let tone        = record.tone.clone();
    let emoji_level = encode_emoji_level(record.emoji_level);
    let analysis    = record.analysis.clone();
    let at_str      = encode_dt(record.created_at);

    // Reserved scoring columns are left to their NULL default.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO analyses (id, text, tone, emoji_level, analysis, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, text, tone, emoji_level, analysis, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn list(&self) -> Result<Vec<AnalysisRecord>> {
    let raws: Vec<RawAnalysis> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM analyses ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], RawAnalysis::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAnalysis::into_record).collect()
  }

  async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawAnalysis> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {COLUMNS} FROM analyses WHERE id = ?1"),
            rusqlite::params![id_str],
            RawAnalysis::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawAnalysis::into_record).transpose()
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM analyses WHERE id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }
}
