#![allow(non_snake_case)]

use dioxus::prelude::*;
use explorer_common::styles::{class_names, CARD_BASE};

#[component]
pub fn Card(#[props(into)] class: Option<String>, children: Element) -> Element {
  let class = class_names([CARD_BASE, class.as_deref().unwrap_or("")]);
  rsx! {
    div { class: "{class}", {children} }
  }
}

#[component]
pub fn CardContent(children: Element) -> Element {
  rsx! {
    div { {children} }
  }
}
