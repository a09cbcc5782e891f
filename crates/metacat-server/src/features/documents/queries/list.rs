use crate::db::documents::{list_documents, Document, DocumentFilter, SortField, SortOrder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 200;

/// Query string of `GET /api/documents`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDocumentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListDocumentsError {
    #[error("{0}")]
    InvalidSortField(String),
    #[error("{0}")]
    InvalidSortOrder(String),
    #[error("{field} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("limit must be between 1 and 200")]
    InvalidLimit,
    #[error("offset must not be negative")]
    InvalidOffset,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn parse_date_param(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<NaiveDate>, ListDocumentsError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let invalid = || ListDocumentsError::InvalidDate {
        field,
        value: value.to_string(),
    };
    if value.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| invalid())
}

impl ListDocumentsQuery {
    /// Check every parameter and build the storage filter. Nothing here
    /// touches the database.
    pub fn validate(&self) -> Result<DocumentFilter, ListDocumentsError> {
        let sort = match self.sort.as_deref() {
            Some(s) => s
                .parse::<SortField>()
                .map_err(ListDocumentsError::InvalidSortField)?,
            None => SortField::default(),
        };
        let order = match self.order.as_deref() {
            Some(s) => s
                .parse::<SortOrder>()
                .map_err(ListDocumentsError::InvalidSortOrder)?,
            None => SortOrder::default(),
        };

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ListDocumentsError::InvalidLimit);
        }
        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ListDocumentsError::InvalidOffset);
        }

        Ok(DocumentFilter {
            importance: self.importance.clone(),
            category: self.category.clone(),
            active: self.active,
            created_from: parse_date_param(self.created_from.as_deref(), "created_from")?,
            created_to: parse_date_param(self.created_to.as_deref(), "created_to")?,
            sort,
            order,
            limit,
            offset,
        })
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListDocumentsQuery,
) -> Result<Vec<Document>, ListDocumentsError> {
    let filter = query.validate()?;
    Ok(list_documents(&pool, &filter).await?)
}
