#![allow(non_snake_case)]

use dioxus::prelude::*;
use explorer_common::models::{format_compact, SearchResult, TickerInfo};

const RESULT_CARD: &str = "bg-slate-50 dark:bg-slate-700/50 rounded-xl p-4 border dark:border-slate-600";

#[component]
pub fn TickerCard(info: TickerInfo) -> Element {
  rsx! {
    div {
      class: RESULT_CARD,
      h4 {
        class: "text-lg font-semibold text-indigo-600 dark:text-indigo-400 mb-2",
        "{info.ticker}"
      }
      p {
        class: "text-sm text-slate-700 dark:text-slate-300",
        "{info.text}"
      }
    }
  }
}

/// Matches of the free text company search, best match first.
#[component]
pub fn ResultList(results: Vec<SearchResult>) -> Element {
  rsx! {
    div {
      class: "space-y-4",
      if results.is_empty() {
        p { class: "text-sm text-slate-500", "No companies matched." }
      }
      for (idx, result) in results.iter().enumerate() {
        div {
          key: "result-{idx}",
          class: RESULT_CARD,
          h4 {
            class: "text-lg font-semibold text-indigo-600 dark:text-indigo-400 mb-2",
            "{result.ticker_symbol()}"
          }
          p {
            class: "text-sm text-slate-700 dark:text-slate-300",
            "{result.summary()}"
          }
        }
      }
    }
  }
}

/// Screener output with whatever market data the backend sent.
#[component]
pub fn ResultsGrid(results: Vec<SearchResult>) -> Element {
  rsx! {
    div {
      class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
      for (idx, result) in results.iter().enumerate() {
        div {
          key: "screen-{idx}",
          class: RESULT_CARD,
          div {
            class: "flex justify-between items-baseline mb-2",
            h4 { class: "text-lg font-semibold text-indigo-600 dark:text-indigo-400", "{result.ticker_symbol()}" }
            if let Some(sector) = &result.sector {
              span { class: "text-xs text-slate-500", "{sector}" }
            }
          }
          p { class: "text-sm text-slate-700 dark:text-slate-300 mb-2", "{result.summary()}" }
          dl {
            class: "grid grid-cols-2 gap-1 text-xs text-slate-600 dark:text-slate-400",
            if let Some(industry) = &result.industry {
              dt { "Industry" }
              dd { "{industry}" }
            }
            if let Some(cap) = result.market_cap {
              dt { "Market Cap" }
              dd { "${format_compact(cap)}" }
            }
            if let Some(volume) = result.volume {
              dt { "Volume" }
              dd { "{format_compact(volume)}" }
            }
          }
        }
      }
    }
  }
}
