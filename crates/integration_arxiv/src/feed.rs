//! Atom feed parsing for arXiv query responses

use chrono::NaiveDate;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde::{Deserialize, Serialize};

use crate::error::ArxivError;

/// Marker in the `<id>` of entries that report API errors
const ERROR_ID_MARKER: &str = "/api/errors";

/// A single preprint from the arXiv feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArxivEntry {
    /// Abstract page URL as given in `<id>`
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Vec<String>,
    pub published: Option<NaiveDate>,
    /// HTML abstract link (`rel="alternate"`), falling back to `id`
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Title,
    Summary,
    Published,
    AuthorName,
}

#[derive(Debug, Default)]
struct EntryBuilder {
    id: String,
    title: String,
    summary: String,
    published: String,
    authors: Vec<String>,
    author_name: String,
    link: Option<String>,
}

impl EntryBuilder {
    fn buffer(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id,
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
            Field::Published => &mut self.published,
            Field::AuthorName => &mut self.author_name,
        }
    }

    fn finish_author(&mut self) {
        let name = std::mem::take(&mut self.author_name);
        let name = name.trim();
        if !name.is_empty() {
            self.authors.push(name.to_string());
        }
    }

    fn build(self) -> Result<ArxivEntry, ArxivError> {
        let id = self.id.trim().to_string();
        if id.contains(ERROR_ID_MARKER) {
            return Err(ArxivError::ApiError(collapse_whitespace(&self.summary)));
        }

        let published = self
            .published
            .trim()
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok());

        Ok(ArxivEntry {
            url: self.link.unwrap_or_else(|| id.clone()),
            id,
            title: collapse_whitespace(&self.title),
            summary: collapse_whitespace(&self.summary),
            authors: self.authors,
            published,
        })
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn alternate_link(e: &BytesStart<'_>) -> Option<String> {
    let mut href = None;
    let mut is_alternate = false;

    for attr in e.attributes().flatten() {
        let value = attr.unescape_value().ok()?;
        match attr.key.local_name().as_ref() {
            b"href" => href = Some(value.into_owned()),
            b"rel" => is_alternate = value == "alternate",
            _ => {},
        }
    }

    href.filter(|_| is_alternate)
}

/// Parse an arXiv Atom feed into entries, in feed order
///
/// # Errors
///
/// Returns [`ArxivError::ParseError`] for malformed XML or a document that is
/// not an Atom feed, and [`ArxivError::ApiError`] when the feed carries an
/// error entry.
pub(crate) fn parse_feed(xml: &str) -> Result<Vec<ArxivEntry>, ArxivError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut saw_feed = false;
    let mut current: Option<EntryBuilder> = None;
    let mut in_author = false;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match (e.local_name().as_ref(), current.is_some()) {
                (b"feed", _) => saw_feed = true,
                (b"entry", false) => current = Some(EntryBuilder::default()),
                (b"author", true) => in_author = true,
                (b"name", true) if in_author => field = Some(Field::AuthorName),
                (b"id", true) => field = Some(Field::Id),
                (b"title", true) => field = Some(Field::Title),
                (b"summary", true) => field = Some(Field::Summary),
                (b"published", true) => field = Some(Field::Published),
                (b"link", true) => {
                    if let (Some(entry), Some(href)) = (current.as_mut(), alternate_link(&e)) {
                        entry.link = Some(href);
                    }
                },
                _ => {},
            },
            Ok(Event::Empty(e)) => {
                if let Some(entry) = current.as_mut() {
                    if e.local_name().as_ref() == b"link" {
                        if let Some(href) = alternate_link(&e) {
                            entry.link = Some(href);
                        }
                    }
                }
            },
            Ok(Event::Text(e)) => {
                if let (Some(entry), Some(field)) = (current.as_mut(), field) {
                    let text = e
                        .unescape()
                        .map_err(|err| ArxivError::ParseError(err.to_string()))?;
                    let buffer = entry.buffer(field);
                    if !buffer.is_empty() {
                        buffer.push(' ');
                    }
                    buffer.push_str(&text);
                }
            },
            Ok(Event::CData(e)) => {
                if let (Some(entry), Some(field)) = (current.as_mut(), field) {
                    entry.buffer(field).push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"entry" => {
                    if let Some(entry) = current.take() {
                        entries.push(entry.build()?);
                    }
                    field = None;
                    in_author = false;
                },
                b"author" => {
                    if let Some(entry) = current.as_mut() {
                        entry.finish_author();
                    }
                    in_author = false;
                },
                _ => field = None,
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ArxivError::ParseError(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    if !saw_feed {
        return Err(ArxivError::ParseError("response is not an Atom feed".to_string()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title type="html">ArXiv Query: search_query=all:ai</title>
  <id>http://arxiv.org/api/abc</id>
  <opensearch:totalResults>2</opensearch:totalResults>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <published>2024-01-02T18:00:00Z</published>
    <title>Large Language Models
      for Indic Languages</title>
    <summary>  We study LLMs &amp; their use
      across India.  </summary>
    <author><name>Asha Rao</name></author>
    <author><name>Vikram Singh</name></author>
    <link href="http://arxiv.org/abs/2401.00001v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2401.00001v1" rel="related" type="application/pdf"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2402.00002v2</id>
    <published>not-a-date</published>
    <title>Second</title>
    <summary>Another abstract.</summary>
    <author><name>Solo Author</name></author>
  </entry>
</feed>"#;

    #[test]
    fn parses_entries_in_order() {
        let entries = parse_feed(FEED).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.title, "Large Language Models for Indic Languages");
        assert_eq!(first.summary, "We study LLMs & their use across India.");
        assert_eq!(first.authors, vec!["Asha Rao", "Vikram Singh"]);
        assert_eq!(first.published, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(first.url, "http://arxiv.org/abs/2401.00001v1");
    }

    #[test]
    fn feed_title_is_not_taken_as_entry_title() {
        let entries = parse_feed(FEED).unwrap();
        assert!(entries.iter().all(|e| !e.title.starts_with("ArXiv Query")));
    }

    #[test]
    fn bad_date_and_missing_link_are_tolerated() {
        let entries = parse_feed(FEED).unwrap();
        let second = &entries[1];
        assert_eq!(second.published, None);
        assert_eq!(second.url, second.id);
    }

    #[test]
    fn empty_feed_has_no_entries() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#;
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn error_entry_becomes_api_error() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/api/errors#incorrect_id_format_for_xyz</id>
    <title>Error</title>
    <summary>incorrect id format for xyz</summary>
  </entry>
</feed>"#;
        let err = parse_feed(xml).unwrap_err();
        assert!(matches!(err, ArxivError::ApiError(msg) if msg == "incorrect id format for xyz"));
    }

    #[test]
    fn non_feed_document_is_rejected() {
        assert!(matches!(
            parse_feed("<html><body>Service down</body></html>"),
            Err(ArxivError::ParseError(_))
        ));
    }

    #[test]
    fn malformed_xml_is_rejected() {
        assert!(matches!(
            parse_feed("<feed><entry><title>x</entry></feed>"),
            Err(ArxivError::ParseError(_))
        ));
    }
}
