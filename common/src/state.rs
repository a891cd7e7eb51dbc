//! Request lifecycle shared by every feature on the page.
//!
//! A feature is either idle, waiting on one request, showing a result or
//! showing an error; [`RequestState`] makes the loading flag and the error
//! string mutually exclusive. Requests are stamped by a [`Sequencer`] so a
//! slow response can never overwrite the answer to a newer request.

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
  #[default]
  Idle,
  Loading,
  Success(T),
  Failed(String),
}

impl<T> RequestState<T> {
  pub fn is_loading(&self) -> bool {
    matches!(self, RequestState::Loading)
  }

  pub fn data(&self) -> Option<&T> {
    match self {
      RequestState::Success(data) => Some(data),
      _ => None,
    }
  }

  pub fn error(&self) -> Option<&str> {
    match self {
      RequestState::Failed(msg) => Some(msg),
      _ => None,
    }
  }
}

impl<T> From<Result<T, AppError>> for RequestState<T> {
  fn from(result: Result<T, AppError>) -> Self {
    match result {
      Ok(data) => RequestState::Success(data),
      Err(e) => RequestState::Failed(e.to_string()),
    }
  }
}

/// Identifies one issued request of one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequencer {
  latest: u64,
}

impl Sequencer {
  pub fn issue(&mut self) -> Ticket {
    self.latest += 1;
    Ticket(self.latest)
  }

  /// Makes every ticket handed out so far stale.
  pub fn invalidate(&mut self) {
    self.latest += 1;
  }

  pub fn is_current(&self, ticket: Ticket) -> bool {
    ticket.0 == self.latest
  }
}

/// An input box bound to one backend call: ticker lookup, text search, add
/// ticker, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<T> {
  pub input: String,
  state: RequestState<T>,
  seq: Sequencer,
}

impl<T> Default for Feature<T> {
  fn default() -> Self {
    Self { input: String::new(), state: RequestState::Idle, seq: Sequencer::default() }
  }
}

impl<T> Feature<T> {
  pub fn state(&self) -> &RequestState<T> {
    &self.state
  }

  /// Validates the input and moves to `Loading`. An empty input fails with
  /// `empty_message` and no ticket is issued, so no request must be sent.
  pub fn begin(&mut self, empty_message: &str) -> Option<Ticket> {
    if self.input.trim().is_empty() {
      self.state = RequestState::Failed(empty_message.to_string());
      return None;
    }
    Some(self.begin_unchecked())
  }

  /// Moves to `Loading` for requests that carry no user input.
  pub fn begin_unchecked(&mut self) -> Ticket {
    self.state = RequestState::Loading;
    self.seq.issue()
  }

  /// The trimmed input, the value that gets sent.
  pub fn value(&self) -> &str {
    self.input.trim()
  }

  /// Applies a response. Returns `false` and leaves the state untouched when a
  /// newer request has been issued since `ticket`.
  pub fn finish(&mut self, ticket: Ticket, result: Result<T, AppError>) -> bool {
    if !self.seq.is_current(ticket) {
      return false;
    }
    self.state = result.into();
    true
  }
}
