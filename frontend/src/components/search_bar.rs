#![allow(non_snake_case)]

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use explorer_common::{
  filters::{Screener, SearchMode},
  models::SearchResult,
  ExplorerClient,
};

use crate::components::ui::{button::Button, input::Input};
use explorer_common::styles::ButtonVariant;

#[component]
fn FilterField(
  label: &'static str,
  value: String,
  #[props(default = "text")] input_type: &'static str,
  #[props(default)] placeholder: &'static str,
  onchange: EventHandler<String>,
) -> Element {
  rsx! {
    label {
      class: "flex flex-col gap-1 text-sm text-slate-600 dark:text-slate-400",
      span { "{label}" }
      Input {
        value,
        input_type,
        placeholder,
        oninput: move |evt: FormEvent| onchange.call(evt.value()),
      }
    }
  }
}

/// Company screener with a natural language form and a structured filter
/// form. Successful searches are reported through `on_search`.
#[component]
pub fn SearchBar(on_search: EventHandler<Vec<SearchResult>>) -> Element {
  let api = use_context::<Signal<ExplorerClient>>();
  let mut screener = use_signal(Screener::default);

  let search = move |_: MouseEvent| {
    let Some((ticket, query)) = screener.write().begin() else {
      return;
    };
    spawn(async move {
      let client = api();
      let result = client.screen(&query).await;
      if let Err(err) = &result {
        warn!("screener search failed: {err}");
      }
      if let Some(results) = screener.write().finish(ticket, result) {
        on_search.call(results);
      }
    });
  };

  let current = screener.read();
  let mode = current.mode;
  let loading = current.state().is_loading();
  let error = current.state().error().map(str::to_string);
  let filters = current.filters.clone();
  let query = current.query.clone();
  drop(current);

  rsx! {
    div {
      class: "space-y-4",
      div {
        class: "flex gap-2",
        for tab in [SearchMode::Nlp, SearchMode::Structured] {
          Button {
            key: "{tab}",
            variant: if tab == mode { ButtonVariant::Default } else { ButtonVariant::Outline },
            onclick: move |_| screener.write().mode = tab,
            "{tab}"
          }
        }
      }
      match mode {
        SearchMode::Nlp => rsx! {
          Input {
            value: query,
            placeholder: "e.g. profitable semiconductor companies in Asia",
            oninput: move |evt: FormEvent| screener.write().query = evt.value(),
          }
        },
        SearchMode::Structured => rsx! {
          div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-4",
            FilterField {
              label: "Sector",
              value: filters.sector,
              placeholder: "Technology",
              onchange: move |v| screener.write().filters.sector = v,
            }
            FilterField {
              label: "Industry",
              value: filters.industry,
              placeholder: "Semiconductors",
              onchange: move |v| screener.write().filters.industry = v,
            }
            FilterField {
              label: "Min Market Cap ($M)",
              value: filters.min_market_cap,
              input_type: "number",
              onchange: move |v| screener.write().filters.min_market_cap = v,
            }
            FilterField {
              label: "Max Market Cap ($M)",
              value: filters.max_market_cap,
              input_type: "number",
              onchange: move |v| screener.write().filters.max_market_cap = v,
            }
            FilterField {
              label: "Min Volume",
              value: filters.min_volume,
              input_type: "number",
              onchange: move |v| screener.write().filters.min_volume = v,
            }
          }
        },
      }
      Button {
        class: "w-full",
        disabled: loading,
        onclick: search,
        if loading { "Searching..." } else { "Search" }
      }
      if let Some(error) = error {
        p { class: "text-sm text-red-500", "{error}" }
      }
    }
  }
}
