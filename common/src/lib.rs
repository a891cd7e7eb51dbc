//! Shared pieces of the financial data explorer: the wire models exchanged with
//! the backend, a thin HTTP client for every endpoint the pages call, and the
//! per-feature request state the pages render from.
//!
//! Nothing in here touches the DOM, so the same code runs in the wasm front-end
//! and in native tests.

pub mod client;
pub mod error;
pub mod filters;
pub mod models;
pub mod session;
pub mod state;
pub mod styles;

pub use client::ExplorerClient;
pub use error::AppError;
