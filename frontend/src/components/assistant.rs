#![allow(non_snake_case)]

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use explorer_common::{
  session::{ChatSession, SessionMode},
  styles::{ButtonSize, ButtonVariant},
  ExplorerClient,
};

use crate::{
  components::ui::{button::Button, input::Input},
  utils::keys::submits,
};

/// Question and answer panel backed by the retrieval assistant.
#[component]
pub fn AssistantPanel(#[props(default)] mode: SessionMode) -> Element {
  let api = use_context::<Signal<ExplorerClient>>();
  let mut chat = use_signal(|| ChatSession::new(mode));

  let mut ask = move || {
    let Some(turn) = chat.write().begin() else {
      return;
    };
    spawn(async move {
      let client = api();
      let result = client.qna_search(&turn.question, turn.session_id.as_deref()).await;
      match &result {
        Ok(resp) => info!("assistant answered, session {:?}", resp.session_id),
        Err(err) => warn!("assistant request failed: {err}"),
      }
      chat.write().finish(turn, result);
    });
  };

  let session = chat.read();
  let loading = session.is_loading();
  let error = session.error().map(str::to_string);
  let conversation = session.conversation().to_vec();
  let draft = session.draft.clone();
  drop(session);

  rsx! {
    div {
      class: "flex flex-col h-full",
      div {
        class: "flex justify-between items-center mb-4",
        h3 { class: "text-xl font-semibold text-slate-800 dark:text-white", "AI Assistant" }
        if !conversation.is_empty() {
          Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Sm,
            onclick: move |_| chat.write().clear(),
            "Clear Chat"
          }
        }
      }
      div {
        class: "flex-1 overflow-y-auto space-y-4 mb-4 custom-scrollbar",
        if conversation.is_empty() {
          p {
            class: "text-center text-slate-500 dark:text-slate-400 mt-8",
            "Ask anything about the companies in the index."
          }
        }
        for (idx, entry) in conversation.iter().enumerate() {
          div {
            key: "turn-{idx}",
            class: "space-y-2",
            div {
              class: "flex justify-end",
              div {
                class: "max-w-[80%] bg-indigo-600 text-white rounded-2xl rounded-tr-sm px-4 py-2",
                "{entry.question}"
              }
            }
            div {
              class: "flex justify-start",
              div {
                class: "max-w-[80%] bg-slate-100 dark:bg-slate-700 text-slate-800 dark:text-slate-200 rounded-2xl rounded-tl-sm px-4 py-2 whitespace-pre-wrap",
                "{entry.answer}"
              }
            }
          }
        }
        if loading {
          div {
            class: "flex items-center gap-2 text-slate-500",
            div { class: "animate-spin h-4 w-4 border-2 border-indigo-600 border-t-transparent rounded-full" }
            span { "Thinking..." }
          }
        }
      }
      if let Some(error) = error {
        p { class: "text-sm text-red-500 mb-2", "{error}" }
      }
      div {
        class: "flex gap-2",
        Input {
          value: draft,
          placeholder: "Ask a question...",
          class: "flex-1",
          disabled: loading,
          oninput: move |evt: FormEvent| chat.write().draft = evt.value(),
          onkeydown: move |evt: KeyboardEvent| {
            if submits(&evt.key()) {
              ask();
            }
          },
        }
        Button {
          disabled: loading,
          onclick: move |_| ask(),
          "Send"
        }
      }
    }
  }
}
