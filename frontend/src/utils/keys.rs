use dioxus::prelude::Key;

/// Single line inputs submit their form on Enter.
pub fn submits(key: &Key) -> bool {
  *key == Key::Enter
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_enter_submits() {
    assert!(submits(&Key::Enter));
    assert!(!submits(&Key::Tab));
    assert!(!submits(&Key::Character("a".into())));
  }
}
