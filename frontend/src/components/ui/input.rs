#![allow(non_snake_case)]

use dioxus::prelude::*;
use explorer_common::styles::input_class;

#[component]
pub fn Input(
  #[props(into)] value: String,
  #[props(into)] placeholder: Option<String>,
  #[props(into, default = "text".to_string())] input_type: String,
  #[props(into)] class: Option<String>,
  #[props(default)] disabled: bool,
  oninput: Option<EventHandler<FormEvent>>,
  onkeydown: Option<EventHandler<KeyboardEvent>>,
) -> Element {
  let class = input_class(class.as_deref());

  rsx! {
    input {
      r#type: "{input_type}",
      class: "{class}",
      value: "{value}",
      placeholder,
      disabled,
      oninput: move |evt| {
        if let Some(handler) = oninput {
          handler.call(evt);
        }
      },
      onkeydown: move |evt| {
        if let Some(handler) = onkeydown {
          handler.call(evt);
        }
      },
    }
  }
}
