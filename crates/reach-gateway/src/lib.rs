//! Client for the hosted chat-completion endpoint.
//!
//! [`CompletionGateway`] is the single place where the unreliable upstream is
//! normalised. Internally every response is classified as a [`Completion`];
//! at the outer boundary that variant is flattened to a plain string, so
//! callers only ever see an `Err` for configuration and transport failures.

mod completion;
mod config;
mod gateway;
mod wire;

pub mod error;

pub use completion::Completion;
pub use config::{
  DEFAULT_COMPLETION_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
  DEFAULT_TEMPERATURE, GatewayConfig,
};
pub use error::{Error, Result};
pub use gateway::CompletionGateway;
