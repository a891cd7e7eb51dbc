//! Same-origin front door for the explorer: forwards the backend paths the
//! pages call to the configured backend and serves the compiled front-end.

pub mod config;
pub mod midwares;
pub mod route_handlers;
pub mod routes;

use axum::{
  routing::{any, get},
  Router,
};
use tower_http::{
  cors::CorsLayer,
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};

use config::Config;
use midwares::app_state::{AppError, ProxyState};
use route_handlers::{forward::forward, health::health};
use routes::ROUTES;

pub fn build_router(config: &Config) -> Result<Router, AppError> {
  let state = ProxyState::new(&config.backend_url)?;

  let mut app = Router::new().route("/health", get(health));
  for route in ROUTES {
    app = app.route(route.source, any(forward));
  }

  if let Some(dir) = &config.static_dir {
    // unknown paths get the app shell so client side routes survive a reload
    let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
    app = app.fallback_service(spa);
  }

  Ok(app.layer(CorsLayer::permissive()).layer(TraceLayer::new_for_http()).with_state(state))
}
