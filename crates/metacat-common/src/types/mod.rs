//! Canonical document types shared by the server and the ingest tool

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document importance, ordered `Low < Medium < High < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

impl Importance {
    /// All variants in ascending order
    pub const ALL: [Importance; 4] = [
        Importance::Low,
        Importance::Medium,
        Importance::High,
        Importance::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Medium => "medium",
            Importance::High => "high",
            Importance::Critical => "critical",
        }
    }

    /// Position in the semantic ordering, used for SQL sorting
    pub fn rank(self) -> u8 {
        match self {
            Importance::Low => 0,
            Importance::Medium => 1,
            Importance::High => 2,
            Importance::Critical => 3,
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Importance::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| format!("Invalid importance: {}", s))
    }
}

/// Access category of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Public,
    Internal,
    Restricted,
    Confidential,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Public,
        Category::Internal,
        Category::Restricted,
        Category::Confidential,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Internal => "internal",
            Category::Restricted => "restricted",
            Category::Confidential => "confidential",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| format!("Invalid category: {}", s))
    }
}

/// File format of the referenced document. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Xlsx,
    Html,
}

impl FileType {
    pub const ALL: [FileType; 4] = [FileType::Pdf, FileType::Docx, FileType::Xlsx, FileType::Html];

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Xlsx => "xlsx",
            FileType::Html => "html",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| format!("Invalid file type: {}", s))
    }
}

/// A validated document record, as produced by the feed parser.
///
/// `url` is the business key: importing a record whose `url` already exists
/// overwrites the stored row instead of creating a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub description: Option<String>,
    pub responsible_unit: String,
    pub created_at: NaiveDate,
    pub url: String,
    pub file_type: FileType,
    pub reading_time_minutes: u32,
    pub importance: Importance,
    pub category: Category,
    pub active: bool,
}
