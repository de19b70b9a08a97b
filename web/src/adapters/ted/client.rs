//! TED search export client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::SearchQuery;
use crate::domain::ports::NoticeFeed;
use crate::error::FetchError;

/// Implementation of the notice feed over the TED RSS export endpoint
pub struct TedClient {
    http: Client,
    base_url: String,
    locale: String,
    ted_lang: String,
}

/// Query string for the search export, in the order TED documents it
#[derive(Serialize)]
struct SearchParams<'a> {
    action: &'a str,
    locale: &'a str,
    #[serde(rename = "Country")]
    country: &'a str,
    #[serde(rename = "Keyword")]
    keyword: &'a str,
    #[serde(rename = "StartDate")]
    start_date: String,
    #[serde(rename = "EndDate")]
    end_date: String,
    #[serde(rename = "Type_Contract")]
    contract_types: String,
    #[serde(rename = "TEDLang")]
    ted_lang: &'a str,
}

impl TedClient {
    pub fn new(
        base_url: String,
        locale: String,
        ted_lang: String,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            locale,
            ted_lang,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            config.base_url.clone(),
            config.locale.clone(),
            config.ted_lang.clone(),
            config.request_timeout,
        )
    }

    fn search_params<'a>(&'a self, query: &'a SearchQuery) -> SearchParams<'a> {
        SearchParams {
            action: "search",
            locale: &self.locale,
            country: &query.country_code,
            keyword: &query.keyword,
            start_date: query.start_date_param(),
            end_date: query.end_date_param(),
            contract_types: query.contract_types_param(),
            ted_lang: &self.ted_lang,
        }
    }
}

#[async_trait]
impl NoticeFeed for TedClient {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(
            "Fetching TED feed for {:?} ({} to {})",
            query.keyword,
            query.start_date_param(),
            query.end_date_param()
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&self.search_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
