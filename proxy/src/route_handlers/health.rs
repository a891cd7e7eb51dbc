use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
  pub code: i32,
  pub status: String,
}

pub async fn health() -> Json<HealthCheckResponse> {
  Json(HealthCheckResponse { code: 200, status: "ok".to_string() })
}
