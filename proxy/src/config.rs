use std::{net::SocketAddr, path::PathBuf};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "explorer-proxy", version, about = "Serves the explorer front-end and forwards its API calls to the backend")]
pub struct Config {
  /// Address to listen on
  #[arg(long, env = "EXPLORER_BIND", default_value = "0.0.0.0:3000")]
  pub bind: SocketAddr,

  /// Origin of the backend service, e.g. http://localhost:8000
  #[arg(long, env = "EXPLORER_BACKEND_URL", default_value = "http://localhost:8000")]
  pub backend_url: String,

  /// Directory holding the built front-end (index.html, wasm, assets)
  #[arg(long, env = "EXPLORER_STATIC_DIR")]
  pub static_dir: Option<PathBuf>,
}
