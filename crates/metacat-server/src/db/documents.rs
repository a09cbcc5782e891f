//! Storage for the `documents` table.
//!
//! Writes take a `&mut SqliteConnection` so the import service can run a
//! whole batch inside one transaction; reads take the pool.

use chrono::NaiveDate;
use metacat_common::{DocumentRecord, Importance};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const DOCUMENT_COLUMNS: &str = "id, title, description, responsible_unit, created_at, url, \
     file_type, reading_time_minutes, importance, category, active";

/// A persisted document row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub responsible_unit: String,
    pub created_at: NaiveDate,
    pub url: String,
    pub file_type: String,
    pub reading_time_minutes: i64,
    pub importance: String,
    pub category: String,
    pub active: bool,
}

/// Columns the document list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    Title,
    Importance,
    Active,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Active,
        SortField::CreatedAt,
        SortField::Importance,
        SortField::Title,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Title => "title",
            SortField::Importance => "importance",
            SortField::Active => "active",
        }
    }

    /// SQL expression used in `ORDER BY`. Importance sorts by rank, not text.
    fn order_expression(self) -> String {
        match self {
            SortField::Importance => {
                let mut expr = String::from("CASE importance");
                for importance in Importance::ALL {
                    expr.push_str(&format!(
                        " WHEN '{}' THEN {}",
                        importance.as_str(),
                        importance.rank()
                    ));
                }
                expr.push_str(&format!(" ELSE {} END", Importance::ALL.len()));
                expr
            },
            other => other.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid sort field: '{}'. Allowed: {}",
                    s,
                    SortField::ALL.map(|f| f.as_str()).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: '{}'. Allowed: asc, desc", s)),
        }
    }
}

/// Validated filter, sort and page for [`list_documents`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFilter {
    pub importance: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    pub sort: SortField,
    pub order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl Default for DocumentFilter {
    fn default() -> Self {
        Self {
            importance: None,
            category: None,
            active: None,
            created_from: None,
            created_to: None,
            sort: SortField::default(),
            order: SortOrder::default(),
            limit: 50,
            offset: 0,
        }
    }
}

pub async fn find_document_id_by_url(
    conn: &mut SqliteConnection,
    url: &str,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM documents WHERE url = ?")
        .bind(url)
        .fetch_optional(conn)
        .await
}

/// Insert a new row and return its id
pub async fn insert_document(
    conn: &mut SqliteConnection,
    record: &DocumentRecord,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO documents (
            title, description, responsible_unit, created_at, url,
            file_type, reading_time_minutes, importance, category, active
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.title)
    .bind(&record.description)
    .bind(&record.responsible_unit)
    .bind(record.created_at)
    .bind(&record.url)
    .bind(record.file_type.as_str())
    .bind(record.reading_time_minutes)
    .bind(record.importance.as_str())
    .bind(record.category.as_str())
    .bind(record.active)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every field of row `id` with `record`
pub async fn update_document(
    conn: &mut SqliteConnection,
    id: i64,
    record: &DocumentRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE documents
        SET title = ?,
            description = ?,
            responsible_unit = ?,
            created_at = ?,
            url = ?,
            file_type = ?,
            reading_time_minutes = ?,
            importance = ?,
            category = ?,
            active = ?
        WHERE id = ?
        "#,
    )
    .bind(&record.title)
    .bind(&record.description)
    .bind(&record.responsible_unit)
    .bind(record.created_at)
    .bind(&record.url)
    .bind(record.file_type.as_str())
    .bind(record.reading_time_minutes)
    .bind(record.importance.as_str())
    .bind(record.category.as_str())
    .bind(record.active)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(())
}

pub async fn list_documents(
    pool: &SqlitePool,
    filter: &DocumentFilter,
) -> Result<Vec<Document>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM documents WHERE 1 = 1", DOCUMENT_COLUMNS));

    if let Some(ref importance) = filter.importance {
        builder.push(" AND importance = ").push_bind(importance.clone());
    }
    if let Some(ref category) = filter.category {
        builder.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(active) = filter.active {
        builder.push(" AND active = ").push_bind(active);
    }
    if let Some(from) = filter.created_from {
        builder.push(" AND created_at >= ").push_bind(from);
    }
    if let Some(to) = filter.created_to {
        builder.push(" AND created_at <= ").push_bind(to);
    }

    // id breaks ties so pages stay stable
    builder
        .push(" ORDER BY ")
        .push(filter.sort.order_expression())
        .push(" ")
        .push(filter.order.as_sql())
        .push(", id ASC LIMIT ")
        .push_bind(filter.limit)
        .push(" OFFSET ")
        .push_bind(filter.offset);

    builder.build_query_as::<Document>().fetch_all(pool).await
}

pub async fn count_documents(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
        .fetch_one(pool)
        .await
}
