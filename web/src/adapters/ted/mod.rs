//! TED adapter
//!
//! HTTP client for the TED search export and the system clock.

pub mod client;
pub mod clock;

pub use client::TedClient;
pub use clock::SystemClock;
