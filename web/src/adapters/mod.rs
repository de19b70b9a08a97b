//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod ted;

pub use ted::{SystemClock, TedClient};
