#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use dioxus::prelude::*;
use pages::home::Home;
use utils::server::explorer_client;

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    // one client for every panel, handed down through context
    use_context_provider(|| Signal::new(explorer_client()));

    rsx! {
        document::Title { "Financial Data Explorer" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        Router::<Route> {}
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}
