//! Request and response shapes of the chat-completion endpoint.

use reach_core::prompt::ChatMessage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
  pub model:       &'a str,
  pub messages:    &'a [ChatMessage],
  pub temperature: f32,
  pub max_tokens:  u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
  pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
  pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
  pub content: Option<String>,
}

impl ChatCompletionResponse {
  /// `choices[0].message.content`, if every step of that path is present.
  pub fn into_first_content(self) -> Option<String> {
    self
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message)
      .and_then(|message| message.content)
  }
}
