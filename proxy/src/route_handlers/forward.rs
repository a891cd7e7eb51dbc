use std::net::{IpAddr, SocketAddr};
use axum::{
  body::{to_bytes, Body},
  extract::{ConnectInfo, Request, State},
  http::{header, HeaderMap, HeaderName},
  response::Response,
};
use tracing::{debug, warn};

use crate::{
  midwares::app_state::{AppError, ProxyState},
  routes::resolve,
};

// request bodies are small JSON documents
const MAX_BODY_BYTES: usize = 1024 * 1024;

fn is_hop_by_hop(name: &HeaderName) -> bool {
  matches!(
    name.as_str(),
    "connection" | "keep-alive" | "proxy-authenticate" | "proxy-authorization" | "te" | "trailer" | "transfer-encoding" | "upgrade"
  )
}

fn forwardable(headers: &HeaderMap) -> impl Iterator<Item = (&HeaderName, &header::HeaderValue)> {
  headers.iter().filter(|(name, _)| !is_hop_by_hop(name))
}

/// The client chain with the peer that connected to us appended.
fn forwarded_for(existing: Option<&str>, peer: Option<IpAddr>) -> Option<String> {
  let existing = existing.map(str::trim).filter(|chain| !chain.is_empty());
  match (existing, peer) {
    (Some(chain), Some(ip)) => Some(format!("{}, {}", chain, ip)),
    (Some(chain), None) => Some(chain.to_string()),
    (None, Some(ip)) => Some(ip.to_string()),
    (None, None) => None,
  }
}

/// Sends the request on to the backend and streams its answer back as is,
/// error statuses included.
pub async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response, AppError> {
  let path = req.uri().path().to_string();
  let dest = resolve(&path).ok_or_else(|| AppError::NotFound(path.clone()))?;

  let mut url = format!("{}{}", state.backend_url, dest);
  if let Some(query) = req.uri().query() {
    url.push('?');
    url.push_str(query);
  }

  let remote_ip = forwarded_for(
    req.headers().get("x-forwarded-for").and_then(|h| h.to_str().ok()),
    req.extensions().get::<ConnectInfo<SocketAddr>>().map(|ConnectInfo(addr)| addr.ip()),
  );

  let (parts, body) = req.into_parts();
  let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| AppError::BadRequest(e.to_string()))?;

  debug!("{} {} -> {}", parts.method, path, url);
  let mut upstream = state.client.request(parts.method.clone(), &url);
  for (name, value) in forwardable(&parts.headers) {
    if *name == header::HOST || *name == header::CONTENT_LENGTH || name.as_str() == "x-forwarded-for" {
      continue;
    }
    upstream = upstream.header(name.clone(), value.clone());
  }
  if let Some(ip) = remote_ip {
    upstream = upstream.header("x-forwarded-for", ip);
  }

  let resp = upstream.body(body).send().await.map_err(|e| {
    warn!("backend request {} failed: {}", url, e);
    AppError::BadGateway(e.to_string())
  })?;

  let mut builder = Response::builder().status(resp.status());
  for (name, value) in forwardable(resp.headers()) {
    builder = builder.header(name.clone(), value.clone());
  }
  builder
    .body(Body::from_stream(resp.bytes_stream()))
    .map_err(|e| AppError::InternalError(e.to_string()))
}
