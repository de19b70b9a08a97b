//! Page renderer
//!
//! Renders the search form and keyword results to a single HTML document.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::entities::{KeywordResults, NoticeRecord, ResultSet};

/// Number of summary characters shown per notice
pub const SUMMARY_PREVIEW_CHARS: usize = 300;

/// Render the page; `results` is `None` before any submission
pub fn render_page(heading: &str, results: Option<&ResultSet>) -> String {
    let mut buf = String::new();

    buf.push_str("<!doctype html>\n");
    buf.push_str("<title>TED Tender Scraper</title>\n");
    buf.push_str(&format!("<h2>{}</h2>\n", encode_text(heading)));
    buf.push_str("<form method=\"post\">\n");
    buf.push_str("  <button type=\"submit\">Search TED for Keywords</button>\n");
    buf.push_str("</form>\n");

    if let Some(results) = results.filter(|r| !r.is_empty()) {
        buf.push_str("<h3>Results</h3>\n");
        for keyword_results in results {
            buf.push_str(&render_keyword(keyword_results));
        }
    }

    buf
}

fn render_keyword(results: &KeywordResults) -> String {
    let mut buf = format!("<h4>Keyword: {}</h4>\n", encode_text(&results.keyword));

    if results.notices.is_empty() {
        buf.push_str("<p>No results found.</p>\n");
        return buf;
    }

    buf.push_str("<ul>\n");
    for notice in &results.notices {
        buf.push_str(&render_notice(notice));
    }
    buf.push_str("</ul>\n");
    buf
}

fn render_notice(notice: &NoticeRecord) -> String {
    format!(
        "<li><strong>{}</strong><br>\n📅 {}<br>\n🔗 <a href=\"{}\" target=\"_blank\">View Notice</a><br>\n📝 {}...</li>\n",
        encode_text(&notice.title),
        encode_text(&notice.published),
        encode_double_quoted_attribute(&notice.link),
        encode_text(&summary_preview(&notice.summary)),
    )
}

/// First `SUMMARY_PREVIEW_CHARS` characters of a summary
pub fn summary_preview(summary: &str) -> &str {
    match summary.char_indices().nth(SUMMARY_PREVIEW_CHARS) {
        Some((end, _)) => &summary[..end],
        None => summary,
    }
}
