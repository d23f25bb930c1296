//! Error type for `reach-gateway`.
//!
//! Upstream HTTP errors and malformed bodies are deliberately absent: those
//! are reported through [`crate::Completion`], not through `Err`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("completion API key is not configured")]
  MissingCredential,

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("completion request failed: {0}")]
  Transport(#[source] reqwest::Error),
}

impl Error {
  /// `true` for errors caused by configuration rather than by a request.
  pub fn is_configuration(&self) -> bool {
    matches!(self, Self::MissingCredential | Self::Client(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
