//! Domain entities
//!
//! Plain models for search queries and the notices they return.

pub mod notice;
pub mod query;

pub use notice::{KeywordResults, NoticeRecord, ResultSet};
pub use query::{ContractType, SearchQuery};
