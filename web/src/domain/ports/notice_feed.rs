//! Notice feed port trait
//!
//! Defines the interface for fetching a raw TED search feed.

use async_trait::async_trait;

use crate::domain::entities::SearchQuery;
use crate::error::FetchError;

/// Source of raw Atom search feeds
#[async_trait]
pub trait NoticeFeed: Send + Sync {
    /// Run one search and return the undecoded response body.
    /// Non-success statuses are errors; nothing is retried or cached.
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<u8>, FetchError>;
}
