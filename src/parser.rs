//! RSS document parsing.
//!
//! The document is walked with a streaming `quick-xml` reader. Only the first
//! child of the root element is treated as the channel; its `title`, `link`
//! and `item` children are read, everything else is skipped.
//!
//! Entity declarations are never expanded. Documents that declare entities in
//! their DOCTYPE are rejected, as are references to anything other than the
//! predefined XML entities and numeric character references.

use chrono::NaiveDate;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesText, Event};
use quick_xml::Reader;
use tracing::warn;

use crate::error::ParseError;
use crate::model::{Article, ArticleBuilder, Feed, FeedBuilder};

type XmlReader<'a> = Reader<&'a [u8]>;

/// Parse an RSS document into a [`Feed`].
pub fn parse_feed(xml: &str) -> Result<Feed, ParseError> {
    let mut reader = Reader::from_str(xml);

    let root = loop {
        match reader.read_event()? {
            Event::Start(e) => break tag_name(e.name().as_ref()),
            Event::DocType(doctype) => check_doctype(&doctype)?,
            Event::Empty(_) | Event::Eof => return Err(ParseError::MissingChannel),
            _ => {}
        }
    };

    let feed = loop {
        match reader.read_event()? {
            Event::Start(e) => break parse_channel(&mut reader, e.name().as_ref())?,
            Event::Empty(_) => break FeedBuilder::default().build(),
            Event::GeneralRef(r) => {
                resolve_reference(&r)?;
            }
            Event::End(_) => return Err(ParseError::MissingChannel),
            Event::Eof => return Err(ParseError::Truncated(root)),
            _ => {}
        }
    };

    // The rest of the root still has to be well formed.
    let mut depth = 1usize;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::GeneralRef(r) => {
                resolve_reference(&r)?;
            }
            Event::DocType(doctype) => check_doctype(&doctype)?,
            Event::Eof if depth > 0 => return Err(ParseError::Truncated(root)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(feed)
}

fn parse_channel(reader: &mut XmlReader<'_>, channel: &[u8]) -> Result<Feed, ParseError> {
    let mut feed = FeedBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"item" => {
                    feed.article(parse_item(reader)?);
                }
                b"title" => {
                    feed.title(read_text(reader, b"title")?);
                }
                b"link" => {
                    feed.link(read_text(reader, b"link")?);
                }
                other => skip_element(reader, other)?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"item" => {
                    feed.article(ArticleBuilder::default().build());
                }
                b"title" => {
                    feed.title(String::new());
                }
                b"link" => {
                    feed.link(String::new());
                }
                _ => {}
            },
            Event::GeneralRef(r) => {
                resolve_reference(&r)?;
            }
            Event::End(_) => return Ok(feed.build()),
            Event::Eof => return Err(ParseError::Truncated(tag_name(channel))),
            _ => {}
        }
    }
}

fn parse_item(reader: &mut XmlReader<'_>) -> Result<Article, ParseError> {
    let mut article = ArticleBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"pubDate" => {
                    let text = read_text(reader, b"pubDate")?;
                    article.date(if text.is_empty() {
                        None
                    } else {
                        parse_pub_date(&text)
                    });
                }
                b"description" => {
                    let text = read_text(reader, b"description")?;
                    article.description(&text);
                }
                b"title" => {
                    article.title(read_text(reader, b"title")?);
                }
                b"link" => {
                    article.link(read_text(reader, b"link")?);
                }
                other => skip_element(reader, other)?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"pubDate" => {
                    article.date(None);
                }
                b"description" => {
                    article.description("");
                }
                b"title" => {
                    article.title(String::new());
                }
                b"link" => {
                    article.link(String::new());
                }
                _ => {}
            },
            Event::GeneralRef(r) => {
                resolve_reference(&r)?;
            }
            Event::End(_) => return Ok(article.build()),
            Event::Eof => return Err(ParseError::Truncated("item".to_string())),
            _ => {}
        }
    }
}

/// Parse an RFC-822 style `pubDate` such as `Wed, 04 Oct 2023 10:00:00 GMT`.
///
/// The leading weekday token is dropped and the next three tokens are read as
/// `day month year`. Time and zone are ignored. Text that does not parse
/// yields `None`.
pub fn parse_pub_date(text: &str) -> Option<NaiveDate> {
    let date_part = text
        .trim()
        .split(' ')
        .skip(1)
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");

    match NaiveDate::parse_from_str(&date_part, "%d %b %Y") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring unparseable pubDate '{}': {}", text, e);
            None
        }
    }
}

/// Collect the direct text content of the element whose start tag was just
/// read, consuming events up to and including its end tag. Text inside
/// nested elements is not included.
fn read_text(reader: &mut XmlReader<'_>, tag: &[u8]) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Text(t) if depth == 0 => text.push_str(&t.xml_content()?),
            Event::CData(c) if depth == 0 => text.push_str(&c.xml_content()?),
            Event::GeneralRef(r) => {
                let resolved = resolve_reference(&r)?;
                if depth == 0 {
                    text.push_str(&resolved);
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(text),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(ParseError::Truncated(tag_name(tag))),
            _ => {}
        }
    }
}

fn skip_element(reader: &mut XmlReader<'_>, tag: &[u8]) -> Result<(), ParseError> {
    read_text(reader, tag).map(|_| ())
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, ParseError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }

    let name = reference.decode()?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| ParseError::UnknownEntity(name.into_owned()))
}

fn check_doctype(doctype: &BytesText<'_>) -> Result<(), ParseError> {
    if doctype.decode()?.contains("<!ENTITY") {
        return Err(ParseError::EntitiesForbidden);
    }
    Ok(())
}

fn tag_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}
