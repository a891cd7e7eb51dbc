use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use explorer_common::{
  error::{QUERY_REQUIRED, TICKER_REQUIRED},
  models::{SearchResult, TickerInfo},
  state::{Feature, RequestState},
  ExplorerClient,
};

use crate::components::{
  assistant::AssistantPanel,
  maintenance::IndexMaintenance,
  results::{ResultList, ResultsGrid, TickerCard},
  search_bar::SearchBar,
  ui::{
    button::Button,
    card::{Card, CardContent},
    input::Input,
  },
};
use crate::utils::keys::submits;

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "min-h-screen bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-900 dark:to-slate-800 p-8",
      div {
        class: "max-w-7xl mx-auto space-y-8",
        h1 {
          class: "text-4xl font-bold text-center text-slate-800 dark:text-white",
          "Financial Data Explorer"
        }
        div {
          class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
          Card {
            class: "panel",
            CardContent {
              div {
                class: "space-y-8",
                TickerLookup {}
                CompanySearch {}
              }
            }
          }
          Card {
            class: "panel",
            CardContent { AssistantPanel {} }
          }
        }
        Screener {}
        Card {
          CardContent { IndexMaintenance {} }
        }
      }
    }
  }
}

#[component]
fn TickerLookup() -> Element {
  let api = use_context::<Signal<ExplorerClient>>();
  let mut lookup = use_signal(Feature::<TickerInfo>::default);

  let mut fetch = move || {
    let Some(ticket) = lookup.write().begin(TICKER_REQUIRED) else {
      return;
    };
    let ticker = lookup.read().value().to_string();
    spawn(async move {
      let client = api();
      let result = client.ticker_info(&ticker).await;
      if let Err(err) = &result {
        warn!("ticker lookup for {ticker} failed: {err}");
      }
      lookup.write().finish(ticket, result);
    });
  };

  let state = lookup.read().state().clone();
  let input = lookup.read().input.clone();

  rsx! {
    section {
      h3 { class: "text-xl font-semibold text-slate-800 dark:text-white mb-4", "Stock Information" }
      div {
        class: "flex gap-2 mb-4",
        Input {
          value: input,
          placeholder: "Enter ticker symbol (e.g. AAPL)",
          class: "flex-1",
          oninput: move |evt: FormEvent| lookup.write().input = evt.value(),
          onkeydown: move |evt: KeyboardEvent| {
            if submits(&evt.key()) {
              fetch();
            }
          },
        }
        Button {
          disabled: state.is_loading(),
          onclick: move |_| fetch(),
          if state.is_loading() { "Loading..." } else { "Get Info" }
        }
      }
      match &state {
        RequestState::Success(info) => rsx! { TickerCard { info: info.clone() } },
        RequestState::Failed(error) => rsx! { p { class: "text-sm text-red-500", "{error}" } },
        _ => rsx! {},
      }
    }
  }
}

#[component]
fn CompanySearch() -> Element {
  let api = use_context::<Signal<ExplorerClient>>();
  let mut search = use_signal(Feature::<Vec<SearchResult>>::default);

  let mut run = move || {
    let Some(ticket) = search.write().begin(QUERY_REQUIRED) else {
      return;
    };
    let query = search.read().value().to_string();
    spawn(async move {
      let client = api();
      let result = client.text_search(&query).await;
      if let Err(err) = &result {
        warn!("text search failed: {err}");
      }
      search.write().finish(ticket, result);
    });
  };

  let state = search.read().state().clone();
  let input = search.read().input.clone();

  rsx! {
    section {
      h3 { class: "text-xl font-semibold text-slate-800 dark:text-white mb-4", "Company Search" }
      div {
        class: "flex gap-2 mb-4",
        Input {
          value: input,
          placeholder: "Search companies by description...",
          class: "flex-1",
          oninput: move |evt: FormEvent| search.write().input = evt.value(),
          onkeydown: move |evt: KeyboardEvent| {
            if submits(&evt.key()) {
              run();
            }
          },
        }
        Button {
          disabled: state.is_loading(),
          onclick: move |_| run(),
          if state.is_loading() { "Searching..." } else { "Search" }
        }
      }
      div {
        class: "panel-scroll custom-scrollbar",
        match &state {
          RequestState::Success(results) => rsx! { ResultList { results: results.clone() } },
          RequestState::Failed(error) => rsx! { p { class: "text-sm text-red-500", "{error}" } },
          _ => rsx! {},
        }
      }
    }
  }
}

/// Screener section: the search form and the latest successful results.
#[component]
fn Screener() -> Element {
  let mut results = use_signal(Vec::<SearchResult>::new);

  rsx! {
    Card {
      CardContent {
        div {
          class: "space-y-6",
          h3 { class: "text-xl font-semibold text-slate-800 dark:text-white", "Company Screener" }
          SearchBar { on_search: move |found| results.set(found) }
          if !results.read().is_empty() {
            ResultsGrid { results: results() }
          }
        }
      }
    }
  }
}
