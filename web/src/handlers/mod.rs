//! HTTP handlers
//!
//! Axum request handlers for the search page.

pub mod search;

pub use search::{run_search, show_form};
