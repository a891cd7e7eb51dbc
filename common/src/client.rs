use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
  error::{AppError, ADD_TICKER_FAILED, QNA_FAILED, REFRESH_FAILED, SCREENER_FAILED, TEXT_SEARCH_FAILED, TICKER_FAILED},
  filters::{ScreenerQuery, StructuredFilters},
  models::{
    AddTickerRequest, ErrorDetail, IndexedTicker, QnaRequest, QnaResponse, ResultsEnvelope, SearchResult,
    TextQuery, TextSearchResponse, TickerInfo,
  },
};

/// What to show when a call fails, either in transport or with a non-2xx
/// status.
#[derive(Debug, Clone, Copy)]
enum OnFailure {
  Fixed(&'static str),
  /// Use the backend's `detail` when it sent one.
  PreferDetail(&'static str),
}

impl OnFailure {
  fn message(self) -> &'static str {
    match self {
      OnFailure::Fixed(msg) | OnFailure::PreferDetail(msg) => msg,
    }
  }
}

/// Thin wrapper over every backend endpoint the pages call. One call, one
/// request: no retries, no caching.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
  client: Client,
  base_url: String,
}

impl ExplorerClient {
  pub fn new(client: Client, base_url: &str) -> Self {
    Self { client, base_url: base_url.trim_end_matches('/').to_string() }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  pub async fn ticker_info(&self, ticker: &str) -> Result<TickerInfo, AppError> {
    let path = format!("/ticker_info/{}", ticker.trim().to_uppercase());
    debug!("GET {}", &path);
    let on_failure = OnFailure::Fixed(TICKER_FAILED);
    let resp = send(self.client.get(self.url(&path)), on_failure).await?;
    read_json(resp, on_failure).await
  }

  pub async fn text_search(&self, query: &str) -> Result<Vec<SearchResult>, AppError> {
    debug!("POST /text_search");
    let on_failure = OnFailure::Fixed(TEXT_SEARCH_FAILED);
    let req = self.client.post(self.url("/text_search")).json(&TextQuery { query: query.to_string() });
    let body: TextSearchResponse = read_json(send(req, on_failure).await?, on_failure).await?;
    Ok(body.into_results())
  }

  pub async fn qna_search(&self, query: &str, session_id: Option<&str>) -> Result<QnaResponse, AppError> {
    debug!("POST /qna_search (session: {:?})", session_id);
    let payload = QnaRequest { query: query.to_string(), session_id: session_id.map(String::from) };
    let on_failure = OnFailure::PreferDetail(QNA_FAILED);
    let resp = send(self.client.post(self.url("/qna_search")).json(&payload), on_failure).await?;
    read_json(resp, on_failure).await
  }

  pub async fn nlp_search(&self, query: &str) -> Result<Vec<SearchResult>, AppError> {
    debug!("GET /api/search");
    let on_failure = OnFailure::Fixed(SCREENER_FAILED);
    let req = self.client.get(self.url("/api/search")).query(&[("query", query)]);
    let body: ResultsEnvelope = read_json(send(req, on_failure).await?, on_failure).await?;
    Ok(body.results)
  }

  pub async fn structured_search(&self, filters: &StructuredFilters) -> Result<Vec<SearchResult>, AppError> {
    let pairs = filters.query_pairs();
    debug!("GET /api/structured_search with {} filters", pairs.len());
    let mut req = self.client.get(self.url("/api/structured_search"));
    if !pairs.is_empty() {
      req = req.query(&pairs);
    }
    let on_failure = OnFailure::Fixed(SCREENER_FAILED);
    let body: ResultsEnvelope = read_json(send(req, on_failure).await?, on_failure).await?;
    Ok(body.results)
  }

  pub async fn screen(&self, query: &ScreenerQuery) -> Result<Vec<SearchResult>, AppError> {
    match query {
      ScreenerQuery::Nlp(text) => self.nlp_search(text).await,
      ScreenerQuery::Structured(filters) => self.structured_search(filters).await,
    }
  }

  pub async fn add_ticker(&self, ticker: &str) -> Result<IndexedTicker, AppError> {
    debug!("POST /add_ticker_to_db");
    let payload = AddTickerRequest { ticker: ticker.trim().to_uppercase() };
    let on_failure = OnFailure::PreferDetail(ADD_TICKER_FAILED);
    let resp = send(self.client.post(self.url("/add_ticker_to_db")).json(&payload), on_failure).await?;
    read_json(resp, on_failure).await
  }

  /// Rebuilds the backend's search index. The success body carries nothing.
  pub async fn refresh_index(&self) -> Result<(), AppError> {
    debug!("POST /refresh");
    let on_failure = OnFailure::PreferDetail(REFRESH_FAILED);
    let resp = send(self.client.post(self.url("/refresh")), on_failure).await?;
    check_status(resp, on_failure).await.map(|_| ())
  }
}

/// Transport failures carry the call's fixed message; the reqwest error is
/// only logged since it names internal URLs.
async fn send(req: RequestBuilder, on_failure: OnFailure) -> Result<Response, AppError> {
  req.send().await.map_err(|e| {
    warn!("backend unreachable: {}", e);
    AppError::Connection(on_failure.message().to_string())
  })
}

async fn check_status(resp: Response, on_failure: OnFailure) -> Result<Response, AppError> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let message = match on_failure {
    OnFailure::Fixed(msg) => msg.to_string(),
    OnFailure::PreferDetail(msg) => resp
      .json::<ErrorDetail>()
      .await
      .ok()
      .and_then(|d| d.message())
      .unwrap_or_else(|| msg.to_string()),
  };
  Err(AppError::RequestFailed { status: status.as_u16(), message })
}

async fn read_json<T: DeserializeOwned>(resp: Response, on_failure: OnFailure) -> Result<T, AppError> {
  let resp = check_status(resp, on_failure).await?;
  resp.json::<T>().await.map_err(|e| AppError::Deserialize(e.to_string()))
}
