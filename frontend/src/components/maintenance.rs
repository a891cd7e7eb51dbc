#![allow(non_snake_case)]

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use explorer_common::{
  error::TICKER_REQUIRED,
  models::IndexedTicker,
  state::{Feature, RequestState},
  styles::ButtonVariant,
  ExplorerClient,
};

use crate::components::ui::{button::Button, input::Input};

/// Adds tickers to the search index and triggers a rebuild.
#[component]
pub fn IndexMaintenance() -> Element {
  let api = use_context::<Signal<ExplorerClient>>();
  let mut add = use_signal(Feature::<IndexedTicker>::default);
  let mut refresh = use_signal(Feature::<()>::default);

  let add_ticker = move |_: MouseEvent| {
    let Some(ticket) = add.write().begin(TICKER_REQUIRED) else {
      return;
    };
    let ticker = add.read().value().to_string();
    spawn(async move {
      let client = api();
      let result = client.add_ticker(&ticker).await;
      match &result {
        Ok(indexed) => info!("indexed {} ({} chunks)", indexed.ticker, indexed.chunks_indexed),
        Err(err) => warn!("add ticker failed: {err}"),
      }
      add.write().finish(ticket, result);
    });
  };

  let rebuild = move |_: MouseEvent| {
    let ticket = refresh.write().begin_unchecked();
    spawn(async move {
      let client = api();
      let result = client.refresh_index().await;
      if let Err(err) = &result {
        warn!("index refresh failed: {err}");
      }
      refresh.write().finish(ticket, result);
    });
  };

  let adding = add.read().state().clone();
  let refreshing = refresh.read().state().clone();
  let input = add.read().input.clone();

  rsx! {
    div {
      class: "space-y-4",
      h3 { class: "text-xl font-semibold text-slate-800 dark:text-white", "Index Maintenance" }
      div {
        class: "flex gap-2",
        Input {
          value: input,
          placeholder: "Ticker to index (e.g. NVDA)",
          class: "flex-1",
          oninput: move |evt: FormEvent| add.write().input = evt.value(),
        }
        Button {
          disabled: adding.is_loading(),
          onclick: add_ticker,
          if adding.is_loading() { "Adding..." } else { "Add Ticker" }
        }
      }
      match &adding {
        RequestState::Success(indexed) => rsx! {
          p {
            class: "text-sm text-emerald-600",
            "Indexed {indexed.ticker}: {indexed.chunks_indexed} chunks"
          }
        },
        RequestState::Failed(error) => rsx! {
          p { class: "text-sm text-red-500", "{error}" }
        },
        _ => rsx! {},
      }
      div {
        class: "flex items-center gap-4",
        Button {
          variant: ButtonVariant::Secondary,
          disabled: refreshing.is_loading(),
          onclick: rebuild,
          if refreshing.is_loading() { "Refreshing..." } else { "Refresh Index" }
        }
        match &refreshing {
          RequestState::Success(_) => rsx! {
            span { class: "text-sm text-emerald-600", "Index refreshed" }
          },
          RequestState::Failed(error) => rsx! {
            span { class: "text-sm text-red-500", "{error}" }
          },
          _ => rsx! {},
        }
      }
    }
  }
}
