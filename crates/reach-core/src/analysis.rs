//! The analysis record, the only entity Reach persists.
//!
//! A record captures one submission's inputs together with whatever text the
//! completion gateway produced for it. Records are append-only: once written
//! no field changes, and the only mutation is deletion by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

// ─── Emoji intensity ─────────────────────────────────────────────────────────

/// How heavily the author wants emoji used. Travels over the wire and into
/// storage as its ordinal (`0`, `1`, `2`).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum EmojiLevel {
  #[default]
  None,
  Light,
  Heavy,
}

impl EmojiLevel {
  /// The ordinal stored in the `emoji_level` column.
  pub fn level(self) -> u8 {
    match self {
      Self::None => 0,
      Self::Light => 1,
      Self::Heavy => 2,
    }
  }

  /// Human-readable label interpolated into the prompt.
  pub fn label(self) -> &'static str {
    match self {
      Self::None => "None",
      Self::Light => "Light",
      Self::Heavy => "Heavy",
    }
  }
}

impl TryFrom<u8> for EmojiLevel {
  type Error = Error;

  fn try_from(level: u8) -> Result<Self, Self::Error> {
    match level {
      0 => Ok(Self::None),
      1 => Ok(Self::Light),
      2 => Ok(Self::Heavy),
      other => Err(Error::InvalidEmojiLevel(other)),
    }
  }
}

impl From<EmojiLevel> for u8 {
  fn from(level: EmojiLevel) -> Self { level.level() }
}

// ─── AnalysisRecord ──────────────────────────────────────────────────────────

/// A persisted submission.
///
/// `analysis` holds either genuine suggestions or a human-readable error
/// string; the store does not distinguish the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
  pub id:             Uuid,
  pub text:           String,
  pub tone:           String,
  pub emoji_level:    EmojiLevel,
  pub analysis:       Option<String>,
  /// Reserved for future scoring; always `None`.
  pub reach_score:    Option<i64>,
  /// Reserved for future scoring; always `None`.
  pub risk_level:     Option<String>,
  /// Reserved for future scoring; always `None`.
  pub blockers:       Option<String>,
  /// Reserved for future scoring; always `None`.
  pub suggested_hook: Option<String>,
  /// Server-assigned; never changes after creation.
  pub created_at:     DateTime<Utc>,
}

// ─── NewAnalysis ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::AnalysisStore::append`].
/// `id` and `created_at` are always set by the store. The reserved scoring
/// fields are not accepted at all.
#[derive(Debug, Clone)]
pub struct NewAnalysis {
  pub text:        String,
  pub tone:        String,
  pub emoji_level: EmojiLevel,
  pub analysis:    Option<String>,
}

impl NewAnalysis {
  /// Build a record input for a completed analysis.
  pub fn new(
    text: impl Into<String>,
    tone: impl Into<String>,
    emoji_level: EmojiLevel,
    analysis: impl Into<String>,
  ) -> Self {
    Self {
      text: text.into(),
      tone: tone.into(),
      emoji_level,
      analysis: Some(analysis.into()),
    }
  }

  /// Stamp this input into a full record. Called by store backends.
  pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> AnalysisRecord {
    AnalysisRecord {
      id,
      text: self.text,
      tone: self.tone,
      emoji_level: self.emoji_level,
      analysis: self.analysis,
      reach_score: None,
      risk_level: None,
      blockers: None,
      suggested_hook: None,
      created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn emoji_level_deserialises_from_ordinal() {
    let level: EmojiLevel = serde_json::from_str("2").unwrap();
    assert_eq!(level, EmojiLevel::Heavy);
    assert_eq!(level.label(), "Heavy");
  }

  #[test]
  fn emoji_level_rejects_out_of_range() {
    assert!(serde_json::from_str::<EmojiLevel>("3").is_err());
    assert!(matches!(
      EmojiLevel::try_from(7),
      Err(Error::InvalidEmojiLevel(7))
    ));
  }

  #[test]
  fn record_serialises_reserved_fields_as_null() {
    let record = NewAnalysis::new("post", "Bold", EmojiLevel::Light, "- tip")
      .into_record(Uuid::new_v4(), Utc::now());
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["emoji_level"], 1);
    assert_eq!(json["analysis"], "- tip");
    for field in ["reach_score", "risk_level", "blockers", "suggested_hook"] {
      assert!(json[field].is_null(), "{field} should be null");
    }
  }
}
