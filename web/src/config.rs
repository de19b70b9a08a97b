use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::ContractType;

pub const DEFAULT_KEYWORDS: [&str; 4] = ["entrepreneurship", "innovation", "incubator", "accelerator"];
pub const DEFAULT_LOOKBACK_DAYS: u32 = 14;
pub const DEFAULT_COUNTRY_CODE: &str = "IE";
pub const DEFAULT_BASE_URL: &str = "https://ted.europa.eu/TED/rss/Export.do";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Keywords searched on every submission, in display order (no duplicates)
    pub keywords: Vec<String>,
    /// Length of the trailing date window ending today
    pub lookback_days: u32,
    pub country_code: String,
    /// TED search export endpoint
    pub base_url: String,
    pub contract_types: Vec<ContractType>,
    pub locale: String,
    /// Value of the `TEDLang` query parameter
    pub ted_lang: String,
    /// Total time allowed for one outbound feed request
    pub request_timeout: Duration,
    /// Heading shown above the search form
    pub page_heading: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            contract_types: ContractType::ALL.to_vec(),
            locale: "en".to_string(),
            ted_lang: "en".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_heading: "Irish Tenders Search (TED)".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let keywords = env::var("TED_KEYWORDS")
            .ok()
            .map(|raw| parse_keywords(&raw))
            .filter(|keywords| !keywords.is_empty())
            .unwrap_or(defaults.keywords);

        Self {
            keywords,
            lookback_days: parsed_var("TED_LOOKBACK_DAYS", defaults.lookback_days),
            country_code: env::var("TED_COUNTRY_CODE").unwrap_or(defaults.country_code),
            base_url: env::var("TED_BASE_URL").unwrap_or(defaults.base_url),
            contract_types: env::var("TED_CONTRACT_TYPES")
                .ok()
                .and_then(|raw| parse_contract_types(&raw))
                .unwrap_or(defaults.contract_types),
            locale: env::var("TED_LOCALE").unwrap_or(defaults.locale),
            ted_lang: env::var("TED_LANG").unwrap_or(defaults.ted_lang),
            request_timeout: Duration::from_secs(parsed_var(
                "TED_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            page_heading: env::var("TED_PAGE_HEADING").unwrap_or(defaults.page_heading),
            port: parsed_var("PORT", defaults.port),
        }
    }
}

/// Split a comma separated keyword list, dropping blanks and repeats
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keywords.iter().any(|existing| existing == keyword) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}

/// Parse a comma separated contract type list; `None` if any item is unknown
pub fn parse_contract_types(raw: &str) -> Option<Vec<ContractType>> {
    let mut types: Vec<ContractType> = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match item.parse::<ContractType>() {
            Ok(t) if !types.contains(&t) => types.push(t),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Ignoring TED_CONTRACT_TYPES: {}", e);
                return None;
            }
        }
    }
    (!types.is_empty()).then_some(types)
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}
