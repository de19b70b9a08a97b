//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test.
//! They record what they were asked so tests can verify behavior.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::SearchQuery;
use crate::domain::ports::{Clock, NoticeFeed};
use crate::error::FetchError;

use super::fixtures::atom_feed;

// ============================================================================
// Scripted Notice Feed
// ============================================================================

#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Body(Vec<u8>),
    Status(StatusCode),
}

/// Feed that answers per keyword; unscripted keywords get an empty feed
#[derive(Default)]
pub struct ScriptedFeed {
    responses: HashMap<String, ScriptedResponse>,
    queries: Arc<RwLock<Vec<SearchQuery>>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, keyword: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(keyword.to_string(), ScriptedResponse::Body(body.into()));
        self
    }

    pub fn with_status(mut self, keyword: &str, status: StatusCode) -> Self {
        self.responses
            .insert(keyword.to_string(), ScriptedResponse::Status(status));
        self
    }

    /// Every query received, in call order
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl NoticeFeed for ScriptedFeed {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<u8>, FetchError> {
        self.queries.write().unwrap().push(query.clone());

        match self.responses.get(&query.keyword) {
            Some(ScriptedResponse::Body(body)) => Ok(body.clone()),
            Some(ScriptedResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: format!("https://ted.example/Export.do?Keyword={}", query.keyword),
            }),
            None => Ok(atom_feed(&[]).into_bytes()),
        }
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
