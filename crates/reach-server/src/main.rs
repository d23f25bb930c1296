//! Reach server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, and serves the JSON API over HTTP.
//!
//! The completion credential is taken from `REACH_API_KEY` if set, else from
//! `api_key` in the config file, else from `HUGGINGFACE_API_KEY`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use reach_api::AppState;
use reach_gateway::CompletionGateway;
use reach_server::{app, expand_tilde, load_config};
use reach_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Reach post-analysis server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config, std::env::var("HUGGINGFACE_API_KEY").ok())
    .context("failed to load configuration")?;

  let gateway_cfg = server_cfg.gateway_config();
  if gateway_cfg.credential().is_none() {
    tracing::warn!("no completion API key configured; every analyze request will fail");
  }
  let gateway = CompletionGateway::new(gateway_cfg).context("failed to build completion gateway")?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let router = app(AppState::new(Arc::new(store), gateway));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, router).await.context("server error")?;

  Ok(())
}
