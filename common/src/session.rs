//! Conversation state of the assistant panel.

use crate::{
  error::{AppError, QUESTION_REQUIRED},
  models::{ConversationEntry, QnaResponse},
  state::{RequestState, Sequencer, Ticket},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
  /// Adopt the backend's session id and send it back on later turns.
  #[default]
  Persistent,
  /// Every turn stands alone, no session id is sent or kept.
  Stateless,
}

/// A question that has been sent and is waiting for its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
  pub ticket: Ticket,
  pub question: String,
  pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatSession {
  pub draft: String,
  conversation: Vec<ConversationEntry>,
  session_id: Option<String>,
  status: RequestState<()>,
  seq: Sequencer,
  mode: SessionMode,
}

impl ChatSession {
  pub fn new(mode: SessionMode) -> Self {
    Self { mode, ..Default::default() }
  }

  pub fn conversation(&self) -> &[ConversationEntry] {
    &self.conversation
  }

  pub fn session_id(&self) -> Option<&str> {
    self.session_id.as_deref()
  }

  pub fn is_loading(&self) -> bool {
    self.status.is_loading()
  }

  pub fn error(&self) -> Option<&str> {
    self.status.error()
  }

  pub fn begin(&mut self) -> Option<PendingTurn> {
    let question = self.draft.trim();
    if question.is_empty() {
      self.status = RequestState::Failed(QUESTION_REQUIRED.to_string());
      return None;
    }
    let question = question.to_string();
    self.status = RequestState::Loading;

    let session_id = match self.mode {
      SessionMode::Persistent => self.session_id.clone(),
      SessionMode::Stateless => None,
    };
    Some(PendingTurn { ticket: self.seq.issue(), question, session_id })
  }

  /// Records the answer to `turn`. Returns `false` if the turn was superseded
  /// by a newer question or by clearing the chat.
  pub fn finish(&mut self, turn: PendingTurn, result: Result<QnaResponse, AppError>) -> bool {
    if !self.seq.is_current(turn.ticket) {
      return false;
    }
    match result {
      Ok(response) => {
        if self.mode == SessionMode::Persistent && self.session_id.is_none() {
          self.session_id = response.session_id;
        }
        self.conversation.push(ConversationEntry { question: turn.question, answer: response.answer });
        self.draft.clear();
        self.status = RequestState::Success(());
      }
      Err(e) => self.status = RequestState::Failed(e.to_string()),
    }
    true
  }

  pub fn clear(&mut self) {
    self.conversation.clear();
    self.session_id = None;
    self.draft.clear();
    self.status = RequestState::Idle;
    self.seq.invalidate();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn answer(text: &str, session: Option<&str>) -> Result<QnaResponse, AppError> {
    Ok(QnaResponse { answer: text.into(), session_id: session.map(String::from) })
  }

  #[test]
  fn empty_question_is_rejected() {
    let mut chat = ChatSession::default();
    assert!(chat.begin().is_none());
    assert_eq!(chat.error(), Some(QUESTION_REQUIRED));
  }

  #[test]
  fn first_answer_adopts_session_and_clears_draft() {
    let mut chat = ChatSession::new(SessionMode::Persistent);
    chat.draft = "What does AAPL do?".into();
    let turn = chat.begin().unwrap();
    assert_eq!(turn.session_id, None);
    assert!(chat.is_loading());

    assert!(chat.finish(turn, answer("Phones.", Some("s-1"))));
    assert_eq!(chat.session_id(), Some("s-1"));
    assert_eq!(chat.draft, "");
    assert_eq!(
      chat.conversation(),
      &[ConversationEntry { question: "What does AAPL do?".into(), answer: "Phones.".into() }]
    );
  }

  #[test]
  fn later_turns_reuse_the_first_session() {
    let mut chat = ChatSession::default();
    chat.draft = "one".into();
    let turn = chat.begin().unwrap();
    chat.finish(turn, answer("1", Some("s-1")));

    chat.draft = "two".into();
    let turn = chat.begin().unwrap();
    assert_eq!(turn.session_id.as_deref(), Some("s-1"));
    chat.finish(turn, answer("2", Some("s-2")));

    assert_eq!(chat.session_id(), Some("s-1"));
    let questions: Vec<_> = chat.conversation().iter().map(|e| e.question.as_str()).collect();
    assert_eq!(questions, ["one", "two"]);
  }

  #[test]
  fn stateless_mode_never_sends_or_keeps_a_session() {
    let mut chat = ChatSession::new(SessionMode::Stateless);
    chat.draft = "one".into();
    let turn = chat.begin().unwrap();
    chat.finish(turn, answer("1", Some("s-1")));
    assert_eq!(chat.session_id(), None);

    chat.draft = "two".into();
    assert_eq!(chat.begin().unwrap().session_id, None);
  }

  #[test]
  fn failure_keeps_draft_and_history() {
    let mut chat = ChatSession::default();
    chat.draft = "why?".into();
    let turn = chat.begin().unwrap();
    let err = AppError::RequestFailed { status: 500, message: "Search error: boom".into() };
    chat.finish(turn, Err(err));

    assert_eq!(chat.error(), Some("Search error: boom"));
    assert_eq!(chat.draft, "why?");
    assert!(chat.conversation().is_empty());
  }

  #[test]
  fn clear_resets_everything_and_drops_inflight_answer() {
    let mut chat = ChatSession::default();
    chat.draft = "one".into();
    let turn = chat.begin().unwrap();
    chat.finish(turn, answer("1", Some("s-1")));

    chat.draft = "two".into();
    let pending = chat.begin().unwrap();
    chat.clear();

    assert!(chat.conversation().is_empty());
    assert_eq!(chat.session_id(), None);
    assert_eq!(chat.draft, "");
    assert_eq!(chat.error(), None);
    assert!(!chat.is_loading());

    assert!(!chat.finish(pending, answer("2", Some("s-1"))));
    assert!(chat.conversation().is_empty());
  }

  #[test]
  fn clear_drops_pending_error() {
    let mut chat = ChatSession::default();
    chat.begin();
    assert!(chat.error().is_some());
    chat.clear();
    assert_eq!(chat.error(), None);
  }
}
