//! Paths the front-end calls on its own origin and where they land on the
//! backend. A source ending in `{*path}` passes the rest of the path through.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRoute {
  pub source: &'static str,
  pub destination: &'static str,
}

const WILDCARD: &str = "{*path}";

pub const ROUTES: &[ProxyRoute] = &[
  ProxyRoute { source: "/ticker_info/{*path}", destination: "/ticker_info/{*path}" },
  ProxyRoute { source: "/text_search", destination: "/text_search" },
  ProxyRoute { source: "/qna_search", destination: "/qna_search" },
  ProxyRoute { source: "/refresh", destination: "/refresh" },
  ProxyRoute { source: "/add_ticker_to_db", destination: "/add_ticker_to_db" },
  // SearchBar endpoints
  ProxyRoute { source: "/api/search", destination: "/api/search" },
  ProxyRoute { source: "/api/structured_search", destination: "/api/structured_search" },
];

impl ProxyRoute {
  /// Backend path for `path`, or `None` when this route does not match it.
  pub fn rewrite(&self, path: &str) -> Option<String> {
    match self.source.strip_suffix(WILDCARD) {
      Some(prefix) => {
        let rest = path.strip_prefix(prefix)?;
        if rest.is_empty() {
          return None;
        }
        let dest_prefix = self.destination.strip_suffix(WILDCARD).unwrap_or(self.destination);
        Some(format!("{}{}", dest_prefix, rest))
      }
      None if path == self.source => Some(self.destination.to_string()),
      None => None,
    }
  }
}

pub fn resolve(path: &str) -> Option<String> {
  ROUTES.iter().find_map(|route| route.rewrite(path))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wildcard_passes_suffix_through() {
    assert_eq!(resolve("/ticker_info/AAPL").as_deref(), Some("/ticker_info/AAPL"));
    assert_eq!(resolve("/ticker_info/BRK.B/extra").as_deref(), Some("/ticker_info/BRK.B/extra"));
  }

  #[test]
  fn wildcard_needs_a_suffix() {
    assert_eq!(resolve("/ticker_info/"), None);
    assert_eq!(resolve("/ticker_info"), None);
  }

  #[test]
  fn exact_routes_match_only_themselves() {
    for path in ["/text_search", "/qna_search", "/refresh", "/add_ticker_to_db", "/api/search", "/api/structured_search"] {
      assert_eq!(resolve(path).as_deref(), Some(path));
    }
    assert_eq!(resolve("/text_search/more"), None);
    assert_eq!(resolve("/"), None);
  }

  #[test]
  fn destination_prefix_can_differ() {
    let route = ProxyRoute { source: "/quotes/{*path}", destination: "/v2/ticker_info/{*path}" };
    assert_eq!(route.rewrite("/quotes/MSFT").as_deref(), Some("/v2/ticker_info/MSFT"));
  }
}
