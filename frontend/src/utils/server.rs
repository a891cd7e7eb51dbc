use dioxus::logger::tracing::info;
use explorer_common::ExplorerClient;
use web_sys::window;

/// Set at build time (see build.rs) when the API lives on another origin.
pub const API_URL: Option<&str> = option_env!("EXPLORER_API_URL");
// where the proxy listens by default, for targets without a page origin
const DEFAULT_API_URL: &str = "http://localhost:3000";

pub fn api_base_url() -> String {
  if let Some(url) = API_URL.filter(|u| !u.is_empty()) {
    return url.to_string();
  }
  window()
    .and_then(|w| w.location().origin().ok())
    .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn explorer_client() -> ExplorerClient {
  let base = api_base_url();
  info!("backend requests go to {}", &base);
  ExplorerClient::new(reqwest::Client::new(), &base)
}
