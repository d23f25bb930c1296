//! Error types for `reach-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("emoji level must be 0, 1 or 2, got {0}")]
  InvalidEmojiLevel(u8),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
