//! Encoding and decoding helpers between Reach domain types and the
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed number of
//! fractional digits and a `Z` suffix, so that lexical order in SQL matches
//! chronological order. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use reach_core::analysis::{AnalysisRecord, EmojiLevel};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── EmojiLevel ───────────────────────────────────────────────────────────────

pub fn encode_emoji_level(level: EmojiLevel) -> i64 { i64::from(level.level()) }

pub fn decode_emoji_level(raw: i64) -> Result<EmojiLevel> {
  let level = u8::try_from(raw).map_err(|_| Error::EmojiLevel(raw))?;
  Ok(EmojiLevel::try_from(level)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` against `analyses`, in the order
/// [`RawAnalysis::from_row`] reads them.
pub const COLUMNS: &str = "id, text, tone, emoji_level, analysis, reach_score, \
                           risk_level, blockers, suggested_hook, created_at";

/// Raw values read directly from an `analyses` row.
pub struct RawAnalysis {
  pub id:             String,
  pub text:           String,
  pub tone:           String,
  pub emoji_level:    i64,
  pub analysis:       Option<String>,
  pub reach_score:    Option<i64>,
  pub risk_level:     Option<String>,
  pub blockers:       Option<String>,
  pub suggested_hook: Option<String>,
  pub created_at:     String,
}

impl RawAnalysis {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:             row.get(0)?,
      text:           row.get(1)?,
      tone:           row.get(2)?,
      emoji_level:    row.get(3)?,
      analysis:       row.get(4)?,
      reach_score:    row.get(5)?,
      risk_level:     row.get(6)?,
      blockers:       row.get(7)?,
      suggested_hook: row.get(8)?,
      created_at:     row.get(9)?,
    })
  }

  pub fn into_record(self) -> Result<AnalysisRecord> {
    Ok(AnalysisRecord {
      id:             decode_uuid(&self.id)?,
      text:           self.text,
      tone:           self.tone,
      emoji_level:    decode_emoji_level(self.emoji_level)?,
      analysis:       self.analysis,
      reach_score:    self.reach_score,
      risk_level:     self.risk_level,
      blockers:       self.blockers,
      suggested_hook: self.suggested_hook,
      created_at:     decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn timestamps_sort_lexically() {
    let whole = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let later = whole + chrono::Duration::microseconds(1);

    let a = encode_dt(whole);
    let b = encode_dt(later);
    assert_eq!(a.len(), b.len());
    assert!(a < b, "{a} should sort before {b}");
    assert_eq!(decode_dt(&b).unwrap(), later);
  }

  #[test]
  fn emoji_level_out_of_range_is_an_error() {
    assert!(matches!(decode_emoji_level(-1), Err(Error::EmojiLevel(-1))));
    assert!(matches!(decode_emoji_level(5), Err(Error::Core(_))));
    assert_eq!(decode_emoji_level(1).unwrap(), EmojiLevel::Light);
  }
}
