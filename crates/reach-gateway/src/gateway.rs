//! [`CompletionGateway`]: sends prompts to the completion endpoint.

use reach_core::prompt::{Prompt, build_prompt};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{Completion, Error, GatewayConfig, Result, wire::ChatCompletionRequest};

/// Async client for the chat-completion endpoint.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based. No timeout
/// or retry is applied; the transport's own behaviour is final.
#[derive(Clone, Debug)]
pub struct CompletionGateway {
  client: Client,
  config: GatewayConfig,
}

impl CompletionGateway {
  pub fn new(config: GatewayConfig) -> Result<Self> {
    let client = Client::builder().build().map_err(Error::Client)?;
    Ok(Self { client, config })
  }

  /// Send `prompt` and classify the response.
  ///
  /// Fails with [`Error::MissingCredential`] before any network activity if
  /// no API key is configured, and with [`Error::Transport`] if no HTTP
  /// response was received. Every HTTP response, whatever its status or
  /// body, becomes `Ok`.
  pub async fn complete(&self, prompt: &Prompt) -> Result<Completion> {
    let api_key = self.config.credential().ok_or(Error::MissingCredential)?;

    let payload = ChatCompletionRequest {
      model:       &self.config.model,
      messages:    &prompt.messages,
      temperature: self.config.temperature,
      max_tokens:  self.config.max_tokens,
    };

    let resp = self
      .client
      .post(&self.config.completion_url)
      .header(AUTHORIZATION, format!("Bearer {api_key}"))
      .json(&payload)
      .send()
      .await
      .map_err(Error::Transport)?;

    let status = resp.status();
    let body = resp.text().await.map_err(Error::Transport)?;

    let completion = Completion::from_response(status.as_u16(), body);
    match &completion {
      Completion::Suggestions(_) => {}
      Completion::UpstreamError { status, .. } => {
        tracing::warn!(status, "completion endpoint returned an error status");
      }
      Completion::Unparseable { .. } => {
        tracing::warn!("completion endpoint returned an unparseable body");
      }
    }
    Ok(completion)
  }

  /// Build the reach-optimization prompt, send it, and flatten the outcome
  /// to the analysis text.
  pub async fn analyze(&self, post: &str, tone: &str, emoji: &str) -> Result<String> {
    let prompt = build_prompt(post, tone, emoji);
    Ok(self.complete(&prompt).await?.into_text())
  }
}
