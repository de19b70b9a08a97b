//! Domain layer
//!
//! Contains the search model with no external dependencies.
//! - `entities`: Queries, notices and per-keyword result sets
//! - `ports`: Trait definitions for the feed source and the clock

pub mod entities;
pub mod ports;
