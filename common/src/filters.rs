use std::fmt;

use crate::{
  error::{AppError, DESCRIPTION_REQUIRED},
  models::SearchResult,
  state::{RequestState, Sequencer, Ticket},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
  #[default]
  Nlp,
  Structured,
}

impl fmt::Display for SearchMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Nlp => write!(f, "Natural Language Search"),
      Self::Structured => write!(f, "Structured Filters"),
    }
  }
}

/// Screener filters as typed by the user. Empty strings mean "not set".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuredFilters {
  pub sector: String,
  pub industry: String,
  pub min_market_cap: String,
  pub max_market_cap: String,
  pub min_volume: String,
}

impl StructuredFilters {
  /// Only the filters that are set, in a stable order, keyed by the names the
  /// backend expects.
  pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
    [
      ("sector", self.sector.as_str()),
      ("industry", self.industry.as_str()),
      ("min_market_cap", self.min_market_cap.as_str()),
      ("max_market_cap", self.max_market_cap.as_str()),
      ("min_volume", self.min_volume.as_str()),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.query_pairs().is_empty()
  }
}

/// A search ready to be sent, built from the SearchBar state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenerQuery {
  Nlp(String),
  Structured(StructuredFilters),
}

/// State behind the SearchBar: which form is showing, what is typed in each,
/// and the outcome of the latest search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Screener {
  pub mode: SearchMode,
  pub query: String,
  pub filters: StructuredFilters,
  state: RequestState<Vec<SearchResult>>,
  seq: Sequencer,
}

impl Screener {
  pub fn state(&self) -> &RequestState<Vec<SearchResult>> {
    &self.state
  }

  /// Builds the request for the selected mode. Structured searches are
  /// always sent, an empty filter set asks for everything.
  pub fn begin(&mut self) -> Option<(Ticket, ScreenerQuery)> {
    let query = match self.mode {
      SearchMode::Nlp => {
        let text = self.query.trim();
        if text.is_empty() {
          self.state = RequestState::Failed(DESCRIPTION_REQUIRED.to_string());
          return None;
        }
        ScreenerQuery::Nlp(text.to_string())
      }
      SearchMode::Structured => ScreenerQuery::Structured(self.filters.clone()),
    };
    self.state = RequestState::Loading;
    Some((self.seq.issue(), query))
  }

  /// Returns the results to hand to the page when this response is the
  /// latest one and succeeded.
  pub fn finish(&mut self, ticket: Ticket, result: Result<Vec<SearchResult>, AppError>) -> Option<Vec<SearchResult>> {
    if !self.seq.is_current(ticket) {
      return None;
    }
    self.state = result.into();
    self.state.data().cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_set_filters_are_sent() {
    let filters = StructuredFilters { min_market_cap: "100".into(), ..Default::default() };
    assert_eq!(filters.query_pairs(), vec![("min_market_cap", "100")]);
  }

  #[test]
  fn all_filters_keep_backend_order() {
    let filters = StructuredFilters {
      sector: "Technology".into(),
      industry: "Semiconductors".into(),
      min_market_cap: "10".into(),
      max_market_cap: "500".into(),
      min_volume: "1000".into(),
    };
    let keys: Vec<_> = filters.query_pairs().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["sector", "industry", "min_market_cap", "max_market_cap", "min_volume"]);
  }

  #[test]
  fn blank_filters_are_empty() {
    assert!(StructuredFilters::default().is_empty());
    assert_eq!(SearchMode::default(), SearchMode::Nlp);
  }

  #[test]
  fn screener_sends_selected_mode() {
    let mut screener = Screener::default();
    screener.query = " chip makers ".into();
    screener.filters.sector = "Technology".into();

    let (_, query) = screener.begin().unwrap();
    assert_eq!(query, ScreenerQuery::Nlp("chip makers".into()));

    screener.mode = SearchMode::Structured;
    let (_, query) = screener.begin().unwrap();
    let ScreenerQuery::Structured(filters) = query else { panic!("expected structured query") };
    assert_eq!(filters.query_pairs(), vec![("sector", "Technology")]);
  }

  #[test]
  fn empty_description_is_rejected() {
    let mut screener = Screener::default();
    assert!(screener.begin().is_none());
    assert_eq!(screener.state().error(), Some(DESCRIPTION_REQUIRED));
  }

  #[test]
  fn mode_switch_mid_request_keeps_latest_results() {
    let mut screener = Screener::default();
    screener.query = "banks".into();
    let (nlp_ticket, _) = screener.begin().unwrap();

    screener.mode = SearchMode::Structured;
    let (structured_ticket, _) = screener.begin().unwrap();

    let latest = vec![SearchResult { symbol: Some("JPM".into()), ..Default::default() }];
    assert_eq!(screener.finish(structured_ticket, Ok(latest.clone())), Some(latest.clone()));

    let stale = vec![SearchResult { ticker: Some("BAC".into()), ..Default::default() }];
    assert_eq!(screener.finish(nlp_ticket, Ok(stale)), None);
    assert_eq!(screener.state().data(), Some(&latest));
  }

  #[test]
  fn failed_search_hands_nothing_to_the_page() {
    let mut screener = Screener { mode: SearchMode::Structured, ..Default::default() };
    let (ticket, _) = screener.begin().unwrap();
    assert_eq!(screener.finish(ticket, Err(AppError::Connection("refused".into()))), None);
    assert!(screener.state().error().unwrap().contains("refused"));
  }
}
