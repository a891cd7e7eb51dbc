use std::{net::SocketAddr, path::PathBuf};

use axum::{
  body::{to_bytes, Body},
  extract::ConnectInfo,
  http::{HeaderMap, Method, Request, StatusCode, Uri},
  response::IntoResponse,
  routing::{any, post},
  Json, Router,
};
use explorer_proxy::{build_router, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
  let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
  Json(json!({
    "method": method.as_str(),
    "path": uri.path(),
    "query": uri.query(),
    "content_type": header("content-type"),
    "forwarded_for": header("x-forwarded-for"),
    "body": body,
  }))
}

async fn failing_search() -> impl IntoResponse {
  (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "Search error: index missing"})))
}

async fn spawn_backend() -> String {
  let app = Router::new()
    .route("/ticker_info/{*rest}", any(echo))
    .route("/qna_search", any(echo))
    .route("/api/structured_search", any(echo))
    .route("/text_search", post(failing_search));

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  format!("http://{}", addr)
}

fn config(backend_url: String, static_dir: Option<PathBuf>) -> Config {
  Config { bind: "127.0.0.1:0".parse().unwrap(), backend_url, static_dir }
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
  let resp = app.oneshot(req).await.unwrap();
  let status = resp.status();
  let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, body.to_vec())
}

async fn send_json(app: Router, req: Request<Body>) -> (StatusCode, Value) {
  let (status, body) = send(app, req).await;
  (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn ticker_path_suffix_is_forwarded() {
  let app = build_router(&config(spawn_backend().await, None)).unwrap();

  let req = Request::get("/ticker_info/AAPL").body(Body::empty()).unwrap();
  let (status, body) = send_json(app, req).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["method"], "GET");
  assert_eq!(body["path"], "/ticker_info/AAPL");
}

#[tokio::test]
async fn post_body_and_headers_are_forwarded() {
  let app = build_router(&config(spawn_backend().await, None)).unwrap();

  let req = Request::post("/qna_search")
    .header("content-type", "application/json")
    .header("x-forwarded-for", "203.0.113.7")
    .body(Body::from(r#"{"query":"What does AAPL do?","session_id":null}"#))
    .unwrap();
  let (status, body) = send_json(app, req).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["method"], "POST");
  assert_eq!(body["content_type"], "application/json");
  assert_eq!(body["forwarded_for"], "203.0.113.7");
  assert_eq!(body["body"], r#"{"query":"What does AAPL do?","session_id":null}"#);
}

#[tokio::test]
async fn peer_address_is_appended_to_forwarded_for() {
  let app = build_router(&config(spawn_backend().await, None)).unwrap();

  let mut req = Request::get("/ticker_info/MSFT")
    .header("x-forwarded-for", "203.0.113.7")
    .body(Body::empty())
    .unwrap();
  let peer: SocketAddr = "198.51.100.20:51234".parse().unwrap();
  req.extensions_mut().insert(ConnectInfo(peer));
  let (_, body) = send_json(app, req).await;

  assert_eq!(body["forwarded_for"], "203.0.113.7, 198.51.100.20");
}

#[tokio::test]
async fn query_string_is_forwarded_verbatim() {
  let app = build_router(&config(spawn_backend().await, None)).unwrap();

  let req = Request::get("/api/structured_search?min_market_cap=100").body(Body::empty()).unwrap();
  let (_, body) = send_json(app, req).await;

  assert_eq!(body["path"], "/api/structured_search");
  assert_eq!(body["query"], "min_market_cap=100");
}

#[tokio::test]
async fn backend_errors_pass_through_unchanged() {
  let app = build_router(&config(spawn_backend().await, None)).unwrap();

  let req = Request::post("/text_search")
    .header("content-type", "application/json")
    .body(Body::from(r#"{"query":"banks"}"#))
    .unwrap();
  let (status, body) = send_json(app, req).await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body, json!({"detail": "Search error: index missing"}));
}

#[tokio::test]
async fn unreachable_backend_returns_bad_gateway() {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let dead = format!("http://{}", listener.local_addr().unwrap());
  drop(listener);

  let app = build_router(&config(dead, None)).unwrap();
  let req = Request::get("/ticker_info/AAPL").body(Body::empty()).unwrap();
  let (status, body) = send_json(app, req).await;

  assert_eq!(status, StatusCode::BAD_GATEWAY);
  assert_eq!(body["code"], 502);
  assert!(body["error"].as_str().unwrap().starts_with("Backend unreachable"));
}

#[tokio::test]
async fn health_reports_ok() {
  let app = build_router(&config("http://localhost:8000".into(), None)).unwrap();

  let req = Request::get("/health").body(Body::empty()).unwrap();
  let (status, body) = send_json(app, req).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({"code": 200, "status": "ok"}));
}

#[tokio::test]
async fn unknown_paths_are_not_proxied() {
  let app = build_router(&config("http://localhost:8000".into(), None)).unwrap();

  let req = Request::get("/admin").body(Body::empty()).unwrap();
  let (status, _) = send(app, req).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_backend_url_is_rejected() {
  assert!(build_router(&config("not a url".into(), None)).is_err());
}

#[tokio::test]
async fn static_dir_serves_files_and_app_shell() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("index.html"), "<html>explorer</html>").unwrap();
  std::fs::write(dir.path().join("app.js"), "console.log('hi')").unwrap();

  let app = build_router(&config("http://localhost:8000".into(), Some(dir.path().to_path_buf()))).unwrap();

  let req = Request::get("/app.js").body(Body::empty()).unwrap();
  let (status, body) = send(app.clone(), req).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, b"console.log('hi')");

  let req = Request::get("/some/client/route").body(Body::empty()).unwrap();
  let (status, body) = send(app, req).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, b"<html>explorer</html>");
}
