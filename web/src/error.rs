//! Error types for the TED search application
//!
//! This module defines error types for each stage of a keyword search:
//! - `FetchError`: TED feed client errors
//! - `ParseError`: Atom feed parsing errors
//! - `SearchError`: Per-keyword failures (wraps both for the orchestrator)

use reqwest::StatusCode;
use thiserror::Error;

/// TED feed client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} for url: {url}")]
    Status { status: StatusCode, url: String },
}

/// Atom feed parsing errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed feed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Expected an Atom <feed> root element, found <{0}>")]
    NotAFeed(String),

    #[error("Feed payload has a second root element <{0}> after </feed>")]
    MultipleRoots(String),

    #[error("Feed payload contains no root element")]
    Empty,

    #[error("Feed payload ended before <{0}> was closed")]
    Truncated(String),
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        ParseError::Xml(quick_xml::Error::from(e))
    }
}

impl From<quick_xml::escape::EscapeError> for ParseError {
    fn from(e: quick_xml::escape::EscapeError) -> Self {
        ParseError::Xml(quick_xml::Error::from(e))
    }
}

/// Failure of a single keyword search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
