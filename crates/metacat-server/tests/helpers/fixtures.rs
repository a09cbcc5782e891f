//! Feed fixtures for metacat server tests
//!
//! Builders that render `<document>` elements with the localized source
//! tokens, so tests only spell out the fields they care about.

#![allow(dead_code)]

/// Builder for one `<document>` element of a feed
#[derive(Debug, Clone)]
pub struct DocumentFixture {
    fields: Vec<(&'static str, String)>,
}

impl DocumentFixture {
    /// A valid record identified by `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            fields: vec![
                ("title", "Testa dokuments".to_string()),
                ("description", "Apraksts".to_string()),
                ("responsible_unit", "IT nodaļa".to_string()),
                ("created_at", "2024-03-15".to_string()),
                ("url", url.into()),
                ("file_type", "pdf".to_string()),
                ("reading_time_minutes", "10".to_string()),
                ("importance", "vidējs".to_string()),
                ("category", "publisks".to_string()),
                ("active", "jā".to_string()),
            ],
        }
    }

    /// Set a child element to raw text
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    /// Drop a child element entirely
    pub fn without(mut self, field: &'static str) -> Self {
        self.fields.retain(|(name, _)| *name != field);
        self
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with("title", title)
    }

    pub fn importance(self, token: &str) -> Self {
        self.with("importance", token)
    }

    pub fn category(self, token: &str) -> Self {
        self.with("category", token)
    }

    pub fn active(self, token: &str) -> Self {
        self.with("active", token)
    }

    pub fn created_at(self, date: &str) -> Self {
        self.with("created_at", date)
    }

    pub fn file_type(self, value: &str) -> Self {
        self.with("file_type", value)
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("  <document>\n");
        for (name, value) in &self.fields {
            xml.push_str(&format!("    <{name}>{value}</{name}>\n"));
        }
        xml.push_str("  </document>\n");
        xml
    }
}

/// Render a complete feed around `documents`
pub fn feed(documents: &[DocumentFixture]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<documents>\n");
    for document in documents {
        xml.push_str(&document.to_xml());
    }
    xml.push_str("</documents>\n");
    xml
}

/// Four records covering each importance level once, one of them inactive
pub fn four_document_feed() -> String {
    feed(&[
        DocumentFixture::new("https://example.com/docs/0001.pdf")
            .title("Kritisks")
            .importance("kritisks")
            .created_at("2024-01-10"),
        DocumentFixture::new("https://example.com/docs/0002.pdf")
            .title("Zems")
            .importance("zems")
            .created_at("2024-02-10"),
        DocumentFixture::new("https://example.com/docs/0003.pdf")
            .title("Augsts")
            .importance("augsts")
            .category("iekšējs")
            .active("nē")
            .created_at("2024-03-10"),
        DocumentFixture::new("https://example.com/docs/0004.pdf")
            .title("Vidējs")
            .importance("vidējs")
            .created_at("2024-04-10"),
    ])
}
