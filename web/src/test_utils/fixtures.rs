//! Test fixtures
//!
//! Factory functions for configs, dates and Atom payloads.

use chrono::NaiveDate;

use crate::config::Config;

/// Date the fixed test clock reports
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

/// Reference configuration
pub fn test_config() -> Config {
    Config::default()
}

/// One Atom `<entry>` element
pub fn atom_entry(title: &str, link: &str, published: &str, summary: &str) -> String {
    format!(
        "  <entry>\n    <title>{}</title>\n    <link href=\"{}\"/>\n    <published>{}</published>\n    <summary>{}</summary>\n  </entry>\n",
        title, link, published, summary
    )
}

/// An Atom feed document wrapping the given entries
pub fn atom_feed(entries: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<feed xmlns=\"http://www.w3.org/2005/Atom\">\n  <title>TED search</title>\n{}</feed>\n",
        entries.concat()
    )
}
