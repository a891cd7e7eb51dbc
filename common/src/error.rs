use thiserror::Error;

// Fixed messages shown next to each feature's input
pub const TICKER_REQUIRED: &str = "Please enter a ticker symbol";
pub const QUERY_REQUIRED: &str = "Please enter a search query";
pub const QUESTION_REQUIRED: &str = "Please enter a question";
pub const DESCRIPTION_REQUIRED: &str = "Please describe the companies you're looking for";

pub const TICKER_FAILED: &str = "Failed to fetch ticker information";
pub const TEXT_SEARCH_FAILED: &str = "Failed to perform text search";
pub const QNA_FAILED: &str = "Failed to perform QnA search";
pub const SCREENER_FAILED: &str = "Failed to search companies";
pub const ADD_TICKER_FAILED: &str = "Failed to add ticker";
pub const REFRESH_FAILED: &str = "Failed to refresh the index";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
  /// Rejected locally, no request was made.
  #[error("{0}")]
  Validation(String),
  /// The backend answered with a non-2xx status.
  #[error("{message}")]
  RequestFailed { status: u16, message: String },
  /// No response at all. Holds the message to show, not the transport error.
  #[error("{0}")]
  Connection(String),
  #[error("Unexpected response from the server: {0}")]
  Deserialize(String),
}

impl AppError {
  pub fn status(&self) -> Option<u16> {
    match self {
      AppError::RequestFailed { status, .. } => Some(*status),
      _ => None,
    }
  }
}
