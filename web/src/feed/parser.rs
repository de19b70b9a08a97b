//! Atom feed parser
//!
//! Extracts notice records from a TED search export. Only elements in the
//! Atom namespace are considered; entries are the direct children of the
//! root `<feed>` and fields the direct children of each entry.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::domain::entities::NoticeRecord;
use crate::error::ParseError;

pub const ATOM_NS: &[u8] = b"http://www.w3.org/2005/Atom";

const ROOT_DEPTH: usize = 1;
const ENTRY_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Summary,
    Published,
}

/// Fields collected so far for the entry being read.
/// `None` means the element has not been seen yet; only the first one counts.
#[derive(Default)]
struct EntryBuilder {
    title: Option<String>,
    link: Option<String>,
    summary: Option<String>,
    published: Option<String>,
}

impl EntryBuilder {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
            Field::Published => &mut self.published,
        }
    }

    /// Start capturing `field` unless an earlier element already filled it
    fn open(&mut self, field: Field) -> bool {
        let slot = self.slot(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(String::new());
        true
    }

    fn push_text(&mut self, field: Field, text: &str) {
        if let Some(value) = self.slot(field) {
            value.push_str(text);
        }
    }

    /// Missing fields become empty strings
    fn build(self) -> NoticeRecord {
        NoticeRecord {
            title: self.title.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            published: self.published.unwrap_or_default(),
        }
    }
}

fn is_atom(ns: &ResolveResult) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == ATOM_NS)
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn href(e: &BytesStart) -> Result<Option<String>, ParseError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"href" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

struct FeedReader {
    depth: usize,
    saw_root: bool,
    open_elements: Vec<String>,
    current: Option<EntryBuilder>,
    field: Option<Field>,
    records: Vec<NoticeRecord>,
}

impl FeedReader {
    fn new() -> Self {
        Self {
            depth: 0,
            saw_root: false,
            open_elements: Vec::new(),
            current: None,
            field: None,
            records: Vec::new(),
        }
    }

    /// Handle an opening tag at `depth`; `self_closing` for `<x/>`
    fn element(
        &mut self,
        ns: &ResolveResult,
        e: &BytesStart,
        depth: usize,
        self_closing: bool,
    ) -> Result<(), ParseError> {
        let name = local_name(e);
        let atom = is_atom(ns);

        // Text after a child element is a tail, not part of the field
        if depth > FIELD_DEPTH {
            self.field = None;
        }

        match depth {
            ROOT_DEPTH => {
                if self.saw_root {
                    return Err(ParseError::MultipleRoots(name));
                }
                if !atom || name != "feed" {
                    return Err(ParseError::NotAFeed(name));
                }
                self.saw_root = true;
            }
            ENTRY_DEPTH if atom && name == "entry" => {
                if self_closing {
                    self.records.push(EntryBuilder::default().build());
                } else {
                    self.current = Some(EntryBuilder::default());
                }
            }
            FIELD_DEPTH if atom => {
                let Some(entry) = self.current.as_mut() else {
                    return Ok(());
                };
                let field = match name.as_str() {
                    "title" => Field::Title,
                    "summary" => Field::Summary,
                    "published" => Field::Published,
                    "link" => {
                        if entry.link.is_none() {
                            entry.link = Some(href(e)?.unwrap_or_default());
                        }
                        return Ok(());
                    }
                    _ => return Ok(()),
                };
                if entry.open(field) && !self_closing {
                    self.field = Some(field);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if self.depth != FIELD_DEPTH {
            return;
        }
        if let (Some(entry), Some(field)) = (self.current.as_mut(), self.field) {
            entry.push_text(field, text);
        }
    }

    fn close(&mut self) {
        match self.depth {
            FIELD_DEPTH => self.field = None,
            ENTRY_DEPTH => {
                if let Some(entry) = self.current.take() {
                    self.records.push(entry.build());
                }
            }
            _ => {}
        }
        self.open_elements.pop();
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parse a raw Atom payload into notice records, in document order
pub fn parse_feed(raw: &[u8]) -> Result<Vec<NoticeRecord>, ParseError> {
    let mut reader = NsReader::from_reader(raw);
    let mut state = FeedReader::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_resolved_event_into(&mut buf)? {
            (ns, Event::Start(e)) => {
                state.depth += 1;
                state.open_elements.push(local_name(&e));
                state.element(&ns, &e, state.depth, false)?;
            }
            (ns, Event::Empty(e)) => {
                state.element(&ns, &e, state.depth + 1, true)?;
            }
            (_, Event::Text(e)) => {
                let text = e.unescape()?;
                state.text(&text);
            }
            (_, Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e);
                state.text(&text);
            }
            (_, Event::End(_)) => state.close(),
            (_, Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = state.open_elements.last() {
        return Err(ParseError::Truncated(unclosed.clone()));
    }
    if !state.saw_root {
        return Err(ParseError::Empty);
    }

    Ok(state.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{atom_entry, atom_feed};

    #[test]
    fn parses_entries_in_order() {
        let xml = atom_feed(&[
            atom_entry("First", "https://ted.example/1", "2024-03-01T10:00:00Z", "One"),
            atom_entry("Second", "https://ted.example/2", "2024-03-02T10:00:00Z", "Two"),
        ]);

        let records = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[0].link, "https://ted.example/1");
        assert_eq!(records[0].published, "2024-03-01T10:00:00Z");
        assert_eq!(records[0].summary, "One");
        assert_eq!(records[1].title, "Second");
    }

    #[test]
    fn empty_feed_has_no_records() {
        let records = parse_feed(atom_feed(&[]).as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn self_closing_feed_has_no_records() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#;
        assert!(parse_feed(xml.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn keeps_text_verbatim() {
        let xml = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <title>  Roads &amp; Bridges </title>
    <link href="https://ted.example/notice?a=1&amp;b=2"/>
    <summary><![CDATA[<p>Design works</p>]]> phase &lt;1&gt;</summary>
    <published>10/03/2024</published>
  </entry>
</feed>"#;

        let records = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(records[0].title, "  Roads & Bridges ");
        assert_eq!(records[0].link, "https://ted.example/notice?a=1&b=2");
        assert_eq!(records[0].summary, "<p>Design works</p> phase <1>");
        assert_eq!(records[0].published, "10/03/2024");
    }

    #[test]
    fn prefixed_atom_namespace() {
        let xml = r#"<a:feed xmlns:a="http://www.w3.org/2005/Atom">
  <a:entry><a:title>Prefixed</a:title><a:link href="x"/></a:entry>
</a:feed>"#;

        let records = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Prefixed");
        assert_eq!(records[0].link, "x");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>Only a title</title></entry>
  <entry><title>Complete</title><link href="l"/><summary>s</summary><published>p</published></entry>
</feed>"#;

        let records = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Only a title");
        assert_eq!(records[0].link, "");
        assert_eq!(records[0].summary, "");
        assert_eq!(records[0].published, "");
        assert_eq!(records[1].summary, "s");
    }

    #[test]
    fn first_link_wins() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><link rel="alternate" href="first"/><link rel="related" href="second"/></entry>
</feed>"#;

        let records = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(records[0].link, "first");
    }

    #[test]
    fn ignores_foreign_namespace_and_nested_elements() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="urn:other">
  <x:entry><title>Not atom</title></x:entry>
  <entry>
    <x:title>Foreign</x:title>
    <title>Real<b>bold</b></title>
    <source><title>Nested source title</title></source>
  </entry>
</feed>"#;

        let records = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Real");
    }

    #[test]
    fn tail_text_after_nested_element_is_ignored() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>Real<b>bold</b> tail</title><summary>Head<br/>after break</summary></entry>
</feed>"#;

        let records = parse_feed(xml.as_bytes()).unwrap();

        assert_eq!(records[0].title, "Real");
        assert_eq!(records[0].summary, "Head");
    }

    #[test]
    fn rejects_second_root_element() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry><title>A</title></entry></feed><feed xmlns="http://www.w3.org/2005/Atom"><entry><title>B</title></entry></feed>"#;

        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MultipleRoots(ref name) if name == "feed"));
    }

    #[test]
    fn rejects_self_closing_second_root() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"/><other/>"#;

        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MultipleRoots(ref name) if name == "other"));
    }

    #[test]
    fn rejects_non_atom_root() {
        let xml = r#"<rss version="2.0"><channel><item/></channel></rss>"#;

        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::NotAFeed(ref name) if name == "rss"));
    }

    #[test]
    fn rejects_feed_without_atom_namespace() {
        let err = parse_feed(b"<feed><entry/></feed>").unwrap_err();
        assert!(matches!(err, ParseError::NotAFeed(_)));
    }

    #[test]
    fn rejects_malformed_xml() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry></feed>"#;

        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Xml(_)));
    }

    #[test]
    fn rejects_truncated_document() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry><title>cut"#;

        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Truncated(_) | ParseError::Xml(_)
        ));
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(matches!(parse_feed(b"").unwrap_err(), ParseError::Empty));
        assert!(matches!(
            parse_feed(b"<?xml version=\"1.0\"?>\n").unwrap_err(),
            ParseError::Empty
        ));
    }
}
