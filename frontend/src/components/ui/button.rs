#![allow(non_snake_case)]

use dioxus::prelude::*;
use explorer_common::styles::{button_class, ButtonSize, ButtonVariant};

#[component]
pub fn Button(
  #[props(default)] variant: ButtonVariant,
  #[props(default)] size: ButtonSize,
  #[props(into)] class: Option<String>,
  #[props(default)] disabled: bool,
  #[props(into, default = "button".to_string())] button_type: String,
  onclick: Option<EventHandler<MouseEvent>>,
  children: Element,
) -> Element {
  let class = button_class(variant, size, class.as_deref());

  rsx! {
    button {
      r#type: "{button_type}",
      class: "{class}",
      disabled,
      onclick: move |evt| {
        if let Some(handler) = onclick {
          handler.call(evt);
        }
      },
      {children}
    }
  }
}
