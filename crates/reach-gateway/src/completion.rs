//! Classification of upstream responses.

use crate::wire::ChatCompletionResponse;

/// Prefix of the text returned when the upstream answers with a non-2xx
/// status.
pub const UPSTREAM_ERROR_PREFIX: &str = "Completion API error: ";

/// Prefix of the text returned when a 2xx body cannot be read as a
/// completion.
pub const PARSE_ERROR_PREFIX: &str = "Could not parse completion response: ";

/// Outcome of one call to the completion endpoint that produced an HTTP
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
  /// The first choice's message content, outer whitespace trimmed.
  Suggestions(String),
  /// The upstream answered with a non-2xx status.
  UpstreamError { status: u16, body: String },
  /// The upstream answered 2xx, but the body was not a completion.
  Unparseable { body: String },
}

impl Completion {
  /// Classify a raw response. `status` is the HTTP status code; `body` is the
  /// full response text.
  pub fn from_response(status: u16, body: String) -> Self {
    if !(200..300).contains(&status) {
      return Self::UpstreamError { status, body };
    }

    match serde_json::from_str::<ChatCompletionResponse>(&body)
      .ok()
      .and_then(ChatCompletionResponse::into_first_content)
    {
      Some(content) => Self::Suggestions(content.trim().to_owned()),
      None => Self::Unparseable { body },
    }
  }

  /// Flatten to the single string shown to users and persisted. Failures
  /// carry the raw upstream body after a fixed prefix.
  pub fn into_text(self) -> String {
    match self {
      Self::Suggestions(text) => text,
      Self::UpstreamError { body, .. } => format!("{UPSTREAM_ERROR_PREFIX}{body}"),
      Self::Unparseable { body } => format!("{PARSE_ERROR_PREFIX}{body}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn non_success_status_is_upstream_error() {
    let c = Completion::from_response(500, "rate limited".into());
    assert_eq!(
      c,
      Completion::UpstreamError { status: 500, body: "rate limited".into() }
    );
    assert_eq!(c.into_text(), "Completion API error: rate limited");
  }

  #[test]
  fn error_status_wins_over_valid_body() {
    let body = r#"{"choices":[{"message":{"content":"hi"}}]}"#;
    let c = Completion::from_response(429, body.into());
    assert!(matches!(c, Completion::UpstreamError { status: 429, .. }));
  }

  #[test]
  fn invalid_json_is_unparseable() {
    let c = Completion::from_response(200, "<html>oops</html>".into());
    assert_eq!(
      c.into_text(),
      "Could not parse completion response: <html>oops</html>"
    );
  }

  #[test]
  fn missing_content_path_is_unparseable() {
    for body in [
      r#"{"choices":[]}"#,
      r#"{"choices":[{}]}"#,
      r#"{"choices":[{"message":{"content":null}}]}"#,
      r#"{"choices":[{"message":{"content":42}}]}"#,
      r#"{"id":"x"}"#,
    ] {
      let c = Completion::from_response(200, body.into());
      assert_eq!(c, Completion::Unparseable { body: body.into() }, "{body}");
    }
  }

  #[test]
  fn content_is_trimmed_on_the_outside_only() {
    let body = r#"{"choices":[{"message":{"content":"  - Use a hook\n  - Add a question  "}}]}"#;
    let c = Completion::from_response(200, body.into());
    assert_eq!(c, Completion::Suggestions("- Use a hook\n  - Add a question".into()));
    assert_eq!(c.into_text(), "- Use a hook\n  - Add a question");
  }
}
