use anyhow::Context;
use clap::Parser;
use explorer_proxy::{build_router, config::Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // .env is optional, real env vars and flags win
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("explorer_proxy=info,tower_http=info")),
    )
    .init();

  let config = Config::parse();
  let app = build_router(&config).context("failed to build router")?;

  let listener = TcpListener::bind(config.bind)
    .await
    .with_context(|| format!("failed to bind {}", config.bind))?;
  info!("proxying to {} on http://{}", config.backend_url, config.bind);
  if let Some(dir) = &config.static_dir {
    info!("serving front-end from {}", dir.display());
  }

  axum::serve(listener, app.into_make_service_with_connect_info::<std::net::SocketAddr>())
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  info!("proxy stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for shutdown signal: {}", e);
  }
}
