//! Gateway configuration.

use std::fmt;

/// Hosted router endpoint used when none is configured.
pub const DEFAULT_COMPLETION_URL: &str =
  "https://router.huggingface.co/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Response length cap, in tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 250;

/// Everything the gateway needs, handed over at construction time.
///
/// The credential is optional here so that a server can start without one;
/// the gateway refuses every request until it is present.
#[derive(Clone)]
pub struct GatewayConfig {
  pub api_key:        Option<String>,
  pub completion_url: String,
  pub model:          String,
  pub temperature:    f32,
  pub max_tokens:     u32,
}

impl GatewayConfig {
  /// A configuration with the default endpoint, model and sampling
  /// parameters.
  pub fn new(api_key: Option<String>) -> Self {
    Self {
      api_key,
      completion_url: DEFAULT_COMPLETION_URL.to_owned(),
      model: DEFAULT_MODEL.to_owned(),
      temperature: DEFAULT_TEMPERATURE,
      max_tokens: DEFAULT_MAX_TOKENS,
    }
  }

  pub fn with_completion_url(mut self, url: impl Into<String>) -> Self {
    self.completion_url = url.into();
    self
  }

  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }

  /// The credential, if one is configured and non-empty.
  pub fn credential(&self) -> Option<&str> {
    self.api_key.as_deref().filter(|k| !k.is_empty())
  }
}

impl fmt::Debug for GatewayConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GatewayConfig")
      .field("api_key", &self.credential().map(|_| "<redacted>"))
      .field("completion_url", &self.completion_url)
      .field("model", &self.model)
      .field("temperature", &self.temperature)
      .field("max_tokens", &self.max_tokens)
      .finish()
  }
}
