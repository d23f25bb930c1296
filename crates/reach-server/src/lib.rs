//! HTTP server assembly for Reach: configuration and the top-level router.

use std::path::{Path, PathBuf};

use axum::Router;
use reach_api::AppState;
use reach_core::store::AnalysisStore;
use reach_gateway::{DEFAULT_COMPLETION_URL, DEFAULT_MODEL, GatewayConfig};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `REACH_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  pub store_path:     PathBuf,
  pub api_key:        Option<String>,
  pub completion_url: String,
  pub model:          String,
}

impl ServerConfig {
  pub fn gateway_config(&self) -> GatewayConfig {
    GatewayConfig::new(self.api_key.clone())
      .with_completion_url(&self.completion_url)
      .with_model(&self.model)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Layer defaults, the optional TOML file at `path`, and `REACH_*`
/// environment variables, in increasing priority.
///
/// `fallback_api_key` (normally `HUGGINGFACE_API_KEY`) is used only when
/// neither the file nor the environment sets `api_key`.
pub fn load_config(
  path: &Path,
  fallback_api_key: Option<String>,
) -> Result<ServerConfig, config::ConfigError> {
  let mut builder = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 3000_i64)?
    .set_default("store_path", "reach.sqlite3")?
    .set_default("completion_url", DEFAULT_COMPLETION_URL)?
    .set_default("model", DEFAULT_MODEL)?;

  if let Some(key) = fallback_api_key {
    builder = builder.set_default("api_key", key)?;
  }

  builder
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("REACH"))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api`, with request tracing.
pub fn app<S>(state: AppState<S>) -> Router
where
  S: AnalysisStore + 'static,
{
  Router::new()
    .nest("/api", reach_api::api_router(state))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use reach_gateway::CompletionGateway;
  use reach_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("reach-config-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn missing_file_yields_defaults() {
    let dir = scratch_dir();
    let cfg = load_config(&dir.join("absent.toml"), None).unwrap();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.store_path, PathBuf::from("reach.sqlite3"));
    assert_eq!(cfg.completion_url, DEFAULT_COMPLETION_URL);
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.address(), "127.0.0.1:3000");
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = scratch_dir();
    let path = dir.join("config.toml");
    std::fs::write(
      &path,
      "port = 8080\nmodel = \"mistralai/Mistral-7B-Instruct\"\napi_key = \"from-file\"\n",
    )
    .unwrap();

    let cfg = load_config(&path, Some("fallback".into())).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.model, "mistralai/Mistral-7B-Instruct");
    assert_eq!(cfg.api_key.as_deref(), Some("from-file"));

    let gw = cfg.gateway_config();
    assert_eq!(gw.credential(), Some("from-file"));
    assert_eq!(gw.model, "mistralai/Mistral-7B-Instruct");
  }

  #[test]
  fn fallback_key_fills_a_missing_api_key() {
    let dir = scratch_dir();
    let cfg = load_config(&dir.join("absent.toml"), Some("hf_fallback".into())).unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("hf_fallback"));
  }

  #[test]
  fn tilde_is_expanded_only_at_the_start() {
    assert_eq!(expand_tilde(Path::new("/tmp/x.db")), PathBuf::from("/tmp/x.db"));
    assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let gateway = CompletionGateway::new(GatewayConfig::new(None)).unwrap();
    let router = app(AppState::new(Arc::new(store), gateway));

    let req = Request::builder()
      .uri("/api/analyses")
      .body(Body::empty())
      .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
