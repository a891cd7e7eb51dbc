use axum::{http::StatusCode, response::IntoResponse, Json};
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Serialize, Clone, Error)]
pub enum AppError {
  #[error("Backend unreachable: {0}")]
  BadGateway(String),
  #[error("Bad request: {0}")]
  BadRequest(String),
  #[error("Not found: {0}")]
  NotFound(String),
  #[error("Internal error: {0}")]
  InternalError(String),
}

impl IntoResponse for AppError {
  fn into_response(self) -> axum::response::Response {
    let status = match &self {
      Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
      Self::BadRequest(_) => StatusCode::BAD_REQUEST,
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // the envelope carries the same text the logs show
    let body = Json(json!({"error": self.to_string(), "code": status.as_u16()}));

    (status, body).into_response()
  }
}

/// Shared by every handler; the reqwest client keeps its connection pool
/// across requests.
#[derive(Clone)]
pub struct ProxyState {
  pub client: Client,
  pub backend_url: String,
}

impl ProxyState {
  pub fn new(backend_url: &str) -> Result<Self, AppError> {
    let backend_url = backend_url.trim_end_matches('/').to_string();
    reqwest::Url::parse(&backend_url).map_err(|e| AppError::InternalError(format!("invalid backend url {}: {}", backend_url, e)))?;

    let client = Client::builder()
      .build()
      .map_err(|e| AppError::InternalError(format!("http client error: {}", e)))?;

    Ok(Self { client, backend_url })
  }
}
