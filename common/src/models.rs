use serde::{Deserialize, Serialize};
use serde_json::Value;

/* Backend Requests */
#[derive(Debug, Clone, Serialize)]
pub struct TextQuery {
  pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QnaRequest {
  pub query: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTickerRequest {
  pub ticker: String,
}

/* Backend Responses */
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerInfo {
  pub ticker: String,
  pub text: String,
  #[serde(default)]
  pub source: Option<String>,
}

/// One row of any company search. The text search endpoint reports
/// `ticker`/`description` while the screener endpoints report
/// `symbol`/`name` plus market data, so every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResult {
  pub ticker: Option<String>,
  pub symbol: Option<String>,
  pub description: Option<String>,
  pub name: Option<String>,
  pub sector: Option<String>,
  pub industry: Option<String>,
  pub market_cap: Option<f64>,
  pub volume: Option<f64>,
}

impl SearchResult {
  pub fn ticker_symbol(&self) -> &str {
    self.ticker.as_deref().or(self.symbol.as_deref()).unwrap_or("—")
  }

  pub fn summary(&self) -> &str {
    self.description.as_deref().or(self.name.as_deref()).unwrap_or("")
  }
}

/// `/text_search` has been seen returning both a bare array and a
/// `{results: [...]}` wrapper, accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TextSearchResponse {
  Bare(Vec<SearchResult>),
  Wrapped { results: Vec<SearchResult> },
}

impl TextSearchResponse {
  pub fn into_results(self) -> Vec<SearchResult> {
    match self {
      TextSearchResponse::Bare(results) => results,
      TextSearchResponse::Wrapped { results } => results,
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope {
  pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QnaResponse {
  pub answer: String,
  #[serde(default)]
  pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexedTicker {
  pub ticker: String,
  pub chunks_indexed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
  pub question: String,
  pub answer: String,
}

/// Error body of the backend. `detail` is usually a string but request
/// validation failures carry a list of objects.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
  pub detail: Option<Value>,
}

impl ErrorDetail {
  pub fn message(&self) -> Option<String> {
    match self.detail.as_ref()? {
      Value::Null => None,
      Value::String(s) if s.is_empty() => None,
      Value::String(s) => Some(s.clone()),
      other => Some(other.to_string()),
    }
  }
}

pub fn format_compact(value: f64) -> String {
  let abs = value.abs();
  if abs >= 1e12 {
    format!("{:.2}T", value / 1e12)
  } else if abs >= 1e9 {
    format!("{:.2}B", value / 1e9)
  } else if abs >= 1e6 {
    format!("{:.2}M", value / 1e6)
  } else if abs >= 1e3 {
    format!("{:.1}K", value / 1e3)
  } else {
    format!("{}", value)
  }
}
