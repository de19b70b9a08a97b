//! Notice domain entity
//!
//! Notices come from the TED Atom feed and live only for the request
//! that fetched them.

/// Title used for the record substituted when a keyword search fails
pub const ERROR_TITLE: &str = "Error";

/// One procurement notice, fields kept verbatim from the feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoticeRecord {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// Publication date in the feed's own textual form
    pub published: String,
}

impl NoticeRecord {
    /// Sentinel record standing in for a keyword whose search failed
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            link: "#".to_string(),
            summary: message.into(),
            published: String::new(),
        }
    }
}

/// Notices found for one keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordResults {
    pub keyword: String,
    pub notices: Vec<NoticeRecord>,
}

/// Results of one submission, one entry per keyword in search order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<KeywordResults>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the notices for a keyword, replacing any previous entry for it
    pub fn insert(&mut self, keyword: impl Into<String>, notices: Vec<NoticeRecord>) {
        let keyword = keyword.into();
        match self.entries.iter_mut().find(|e| e.keyword == keyword) {
            Some(existing) => existing.notices = notices,
            None => self.entries.push(KeywordResults { keyword, notices }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, keyword: &str) -> Option<&[NoticeRecord]> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.notices.as_slice())
    }

    #[cfg(test)]
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a KeywordResults;
    type IntoIter = std::slice::Iter<'a, KeywordResults>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
