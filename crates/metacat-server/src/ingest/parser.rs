//! Feed and record parsing.
//!
//! A feed is a root element holding `<document>` children:
//!
//! ```xml
//! <documents>
//!   <document>
//!     <title>Gada pārskats 2024</title>
//!     <description>optional</description>
//!     <responsible_unit>IT nodaļa</responsible_unit>
//!     <created_at>2024-03-15</created_at>
//!     <url>https://example.com/docs/0001.pdf</url>
//!     <file_type>pdf</file_type>
//!     <reading_time_minutes>10</reading_time_minutes>
//!     <importance>augsts</importance>
//!     <category>iekšējs</category>
//!     <active>jā</active>
//!   </document>
//! </documents>
//! ```
//!
//! Only `<document>` children of the root are records, and only the first
//! occurrence of each field inside a record is read. Other elements are
//! skipped. Parsing is all-or-nothing: the first invalid record aborts the
//! batch.

use super::IngestError;
use chrono::NaiveDate;
use metacat_common::vocabulary::{
    map_token, parse_file_type, ACTIVE_TOKENS, CATEGORY_TOKENS, IMPORTANCE_TOKENS,
};
use metacat_common::{DocumentRecord, ValidationError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const RECORD_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// One `<document>` element. Every child is optional here so that a missing
/// field surfaces as a validation error rather than a markup error.
#[derive(Debug, Default)]
pub struct RawDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub responsible_unit: Option<String>,
    pub created_at: Option<String>,
    pub url: Option<String>,
    pub file_type: Option<String>,
    pub reading_time_minutes: Option<String>,
    pub importance: Option<String>,
    pub category: Option<String>,
    pub active: Option<String>,
}

impl RawDocument {
    fn field_mut(&mut self, name: &[u8]) -> Option<&mut Option<String>> {
        match name {
            b"title" => Some(&mut self.title),
            b"description" => Some(&mut self.description),
            b"responsible_unit" => Some(&mut self.responsible_unit),
            b"created_at" => Some(&mut self.created_at),
            b"url" => Some(&mut self.url),
            b"file_type" => Some(&mut self.file_type),
            b"reading_time_minutes" => Some(&mut self.reading_time_minutes),
            b"importance" => Some(&mut self.importance),
            b"category" => Some(&mut self.category),
            b"active" => Some(&mut self.active),
            _ => None,
        }
    }
}

/// Walks the markup of a feed and collects its `<document>` records
#[derive(Default)]
struct FeedReader {
    documents: Vec<RawDocument>,
    current: Option<RawDocument>,
    /// Field whose direct text is being collected
    capture: Option<Vec<u8>>,
    depth: usize,
    root_closed: bool,
}

impl FeedReader {
    fn open(&mut self, element: &BytesStart<'_>) -> Result<(), String> {
        if self.root_closed {
            return Err("unexpected element after the root element".to_string());
        }
        self.depth += 1;
        let name = element.name();

        match self.depth {
            RECORD_DEPTH if name.as_ref() == b"document" => {
                self.current = Some(RawDocument::default());
            },
            FIELD_DEPTH => {
                if let Some(slot) = self.current.as_mut().and_then(|d| d.field_mut(name.as_ref())) {
                    if slot.is_none() {
                        *slot = Some(String::new());
                        self.capture = Some(name.as_ref().to_vec());
                    }
                }
            },
            _ => {},
        }
        Ok(())
    }

    fn close(&mut self) {
        match self.depth {
            1 => self.root_closed = true,
            RECORD_DEPTH => {
                if let Some(document) = self.current.take() {
                    self.documents.push(document);
                }
            },
            FIELD_DEPTH => self.capture = None,
            _ => {},
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn text(&mut self, text: &str) -> Result<(), String> {
        if self.depth == 0 {
            if !text.trim_start_matches('\u{feff}').trim().is_empty() {
                return Err("text outside the root element".to_string());
            }
            return Ok(());
        }
        if self.depth != FIELD_DEPTH {
            return Ok(());
        }
        if let (Some(document), Some(name)) = (self.current.as_mut(), self.capture.as_deref()) {
            if let Some(Some(value)) = document.field_mut(name) {
                value.push_str(text);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<RawDocument>, String> {
        if !self.root_closed {
            return Err("unexpected end of feed: root element is missing or unclosed".to_string());
        }
        Ok(self.documents)
    }
}

/// Check that `feed` is well-formed and collect its raw records
fn read_documents(feed: &str) -> Result<Vec<RawDocument>, IngestError> {
    let mut reader = Reader::from_str(feed);
    let mut state = FeedReader::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            IngestError::MalformedInput(format!("{} at byte {}", e, reader.error_position()))
        })?;
        let step = match event {
            Event::Start(ref e) => state.open(e),
            Event::Empty(ref e) => state.open(e).map(|()| state.close()),
            Event::End(_) => {
                state.close();
                Ok(())
            },
            Event::Text(ref e) => match e.unescape() {
                Ok(text) => state.text(&text),
                Err(e) => Err(e.to_string()),
            },
            Event::CData(ref e) => match e.decode() {
                Ok(text) => state.text(&text),
                Err(e) => Err(e.to_string()),
            },
            Event::Eof => break,
            _ => Ok(()),
        };
        step.map_err(|message| {
            IngestError::MalformedInput(format!("{} at byte {}", message, reader.buffer_position()))
        })?;
    }

    state.finish().map_err(IngestError::MalformedInput)
}

/// Trimmed, non-empty text of an optional child
fn optional_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required_text<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    optional_text(value).ok_or(ValidationError::MissingField { field })
}

fn parse_minutes(value: &str, field: &'static str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidInteger {
        field,
        value: value.to_string(),
    };
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    };
    // chrono accepts unpadded months and days; the feed format does not
    if value.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

/// Validate one raw record into a [`DocumentRecord`]
pub fn parse_document(raw: &RawDocument) -> Result<DocumentRecord, ValidationError> {
    let title = required_text(&raw.title, "title")?;
    let description = optional_text(&raw.description);
    let responsible_unit = required_text(&raw.responsible_unit, "responsible_unit")?;
    let created_at = parse_date(required_text(&raw.created_at, "created_at")?, "created_at")?;
    let url = required_text(&raw.url, "url")?;
    let file_type = parse_file_type(required_text(&raw.file_type, "file_type")?)?;
    let reading_time_minutes = parse_minutes(
        required_text(&raw.reading_time_minutes, "reading_time_minutes")?,
        "reading_time_minutes",
    )?;
    let importance = map_token(
        required_text(&raw.importance, "importance")?,
        IMPORTANCE_TOKENS,
        "importance",
    )?;
    let category = map_token(
        required_text(&raw.category, "category")?,
        CATEGORY_TOKENS,
        "category",
    )?;
    let active = map_token(required_text(&raw.active, "active")?, ACTIVE_TOKENS, "active")?;

    Ok(DocumentRecord {
        title: title.to_string(),
        description: description.map(str::to_string),
        responsible_unit: responsible_unit.to_string(),
        created_at,
        url: url.to_string(),
        file_type,
        reading_time_minutes,
        importance,
        category,
        active,
    })
}

/// Parse a whole feed.
///
/// Malformed markup fails with [`IngestError::MalformedInput`]. Otherwise
/// records are validated in document order and the first failure is
/// returned as [`IngestError::Validation`] carrying its 1-based ordinal.
pub fn parse_feed(feed: &str) -> Result<Vec<DocumentRecord>, IngestError> {
    read_documents(feed)?
        .iter()
        .enumerate()
        .map(|(index, document)| {
            parse_document(document).map_err(|source| IngestError::Validation {
                ordinal: index + 1,
                source,
            })
        })
        .collect()
}
