//! Prompt construction for the reach-optimization request.
//!
//! [`build_prompt`] is pure: it interpolates its inputs verbatim and never
//! validates, escapes, or truncates them. Sampling parameters and the model
//! id are the gateway's concern.

use serde::{Deserialize, Serialize};

/// Fixed system instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You analyze social-media posts and give \
                                      concise, bullet-point reach optimization \
                                      advice.";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  System,
  User,
}

/// One message of a chat-style completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role:    Role,
  pub content: String,
}

impl ChatMessage {
  pub fn system(content: impl Into<String>) -> Self {
    Self { role: Role::System, content: content.into() }
  }

  pub fn user(content: impl Into<String>) -> Self {
    Self { role: Role::User, content: content.into() }
  }
}

/// The messages of a completion request, ready to be wrapped by a gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
  pub messages: Vec<ChatMessage>,
}

/// Build the two-message prompt for `post`.
///
/// `tone` and `emoji` are opaque labels; whatever is passed appears literally
/// in the user message.
pub fn build_prompt(post: &str, tone: &str, emoji: &str) -> Prompt {
  let user = format!(
    "Analyze this post.\n\
     \n\
     Tone: {tone}\n\
     Emoji usage: {emoji}\n\
     \n\
     Post:\n\
     {post}\n\
     \n\
     Return bullet-point suggestions only."
  );

  Prompt {
    messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(user)],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn user_content(prompt: &Prompt) -> &str {
    &prompt
      .messages
      .iter()
      .find(|m| m.role == Role::User)
      .expect("user message")
      .content
  }

  #[test]
  fn system_message_comes_first() {
    let prompt = build_prompt("hello", "Casual", "Light");
    assert_eq!(prompt.messages.len(), 2);
    assert_eq!(prompt.messages[0].role, Role::System);
    assert_eq!(prompt.messages[0].content, SYSTEM_INSTRUCTION);
    assert!(SYSTEM_INSTRUCTION.contains("bullet-point"));
  }

  #[test]
  fn user_message_contains_inputs_verbatim() {
    let post = "  Shipped v2 today!\n\nThoughts? <b>&amp;</b> 🚀  ";
    let prompt = build_prompt(post, "Professional", "Heavy");
    let content = user_content(&prompt);

    assert!(content.contains(post), "post must not be trimmed or escaped");
    assert!(content.contains("Tone: Professional"));
    assert!(content.contains("Emoji usage: Heavy"));
    assert!(content.contains("bullet-point suggestions only"));
  }

  #[test]
  fn unexpected_labels_pass_through() {
    let prompt = build_prompt("post", "", "Sarcastic {braces}");
    let content = user_content(&prompt);

    assert!(content.contains("Tone: \n"));
    assert!(content.contains("Emoji usage: Sarcastic {braces}"));
  }

  #[test]
  fn long_posts_are_not_truncated() {
    let post = "word ".repeat(5_000);
    let prompt = build_prompt(&post, "Bold", "None");
    assert!(user_content(&prompt).contains(&post));
  }
}
