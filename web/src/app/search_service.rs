//! Search service
//!
//! Runs the configured keyword searches one after another and collects
//! the results. A failing keyword is replaced by an error record so the
//! remaining keywords are still searched and shown.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::entities::{NoticeRecord, ResultSet, SearchQuery};
use crate::domain::ports::{Clock, NoticeFeed};
use crate::error::SearchError;
use crate::feed::parse_feed;

/// Service for searching TED across a keyword list
pub struct SearchService<F, C>
where
    F: NoticeFeed,
    C: Clock,
{
    feed: Arc<F>,
    clock: Arc<C>,
    config: Arc<Config>,
}

impl<F, C> SearchService<F, C>
where
    F: NoticeFeed,
    C: Clock,
{
    pub fn new(feed: Arc<F>, clock: Arc<C>, config: Arc<Config>) -> Self {
        Self {
            feed,
            clock,
            config,
        }
    }

    /// Build the query for one keyword over the window ending `today`
    pub fn query_for(&self, keyword: &str, today: NaiveDate) -> SearchQuery {
        SearchQuery::for_window(
            keyword,
            &self.config.country_code,
            &self.config.contract_types,
            today,
            self.config.lookback_days,
        )
    }

    /// Fetch and parse the feed for one keyword
    pub async fn search_keyword(
        &self,
        keyword: &str,
        today: NaiveDate,
    ) -> Result<Vec<NoticeRecord>, SearchError> {
        let query = self.query_for(keyword, today);
        let raw = self.feed.fetch(&query).await?;
        Ok(parse_feed(&raw)?)
    }

    /// Search every configured keyword
    pub async fn run(&self) -> ResultSet {
        self.run_keywords(&self.config.keywords).await
    }

    /// Search the given keywords in order; every keyword gets an entry
    pub async fn run_keywords(&self, keywords: &[String]) -> ResultSet {
        // One date for the whole submission so every keyword shares a window
        let today = self.clock.today();
        let mut results = ResultSet::new();

        for keyword in keywords {
            let notices = match self.search_keyword(keyword, today).await {
                Ok(notices) => {
                    tracing::info!("Found {} notices for {:?}", notices.len(), keyword);
                    notices
                }
                Err(e) => {
                    tracing::warn!("Search for {:?} failed: {}", keyword, e);
                    vec![NoticeRecord::error(e.to_string())]
                }
            };
            results.insert(keyword.as_str(), notices);
        }

        results
    }
}
