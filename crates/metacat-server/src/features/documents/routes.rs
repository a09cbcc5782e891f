//! Document API routes
//!
//! # Route Structure
//!
//! - `POST /api/import` - Fetch the remote feed and import it
//! - `GET /api/documents` - List documents with filters, sorting and paging
//! - `GET /api/remote/documents.xml` - Serve the local feed file as the
//!   simulated remote source

use crate::api::response::ErrorResponse;
use crate::features::FeatureState;
use crate::ingest::IngestError;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::{
    commands::{ImportDocumentsCommand, ImportDocumentsError},
    queries::{GetFeedFileError, ListDocumentsError, ListDocumentsQuery},
};

// ============================================================================
// Router Configuration
// ============================================================================

pub fn documents_routes() -> Router<FeatureState> {
    Router::new()
        .route("/import", post(import_documents))
        .route("/documents", get(list_documents))
        .route("/remote/documents.xml", get(get_feed_file))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Import the remote feed
///
/// # Endpoint
///
/// `POST /api/import`
///
/// # Response
///
/// - `200 OK` - `{"imported": n}`
/// - `422 Unprocessable Entity` - Feed is malformed or a record is invalid
/// - `502 Bad Gateway` - Feed could not be fetched
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(state), fields(url = %state.feed.remote_url))]
async fn import_documents(
    State(state): State<FeatureState>,
) -> Result<Response, DocumentApiError> {
    let command = ImportDocumentsCommand::from_config(&state.feed);
    let response = super::commands::import::handle(state.db, command).await?;

    tracing::info!(imported = response.imported, "Feed imported via API");

    Ok((StatusCode::OK, Json(response)).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// List documents
///
/// # Endpoint
///
/// `GET /api/documents?importance=high&active=true&sort=importance&order=asc`
///
/// # Response
///
/// - `200 OK` - JSON array of documents
/// - `400 Bad Request` - Unparseable query string, or invalid sort field,
///   sort order, date, limit or offset
#[tracing::instrument(skip(state, query))]
async fn list_documents(
    State(state): State<FeatureState>,
    query: Result<Query<ListDocumentsQuery>, QueryRejection>,
) -> Result<Response, DocumentApiError> {
    let Query(query) = query?;
    let documents = super::queries::list::handle(state.db, query).await?;

    tracing::debug!(count = documents.len(), "Documents listed via API");

    Ok((StatusCode::OK, Json(documents)).into_response())
}

#[tracing::instrument(skip(state))]
async fn get_feed_file(State(state): State<FeatureState>) -> Result<Response, DocumentApiError> {
    let bytes = super::queries::feed_file::handle(&state.feed.local_file).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        bytes,
    )
        .into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum DocumentApiError {
    ImportError(ImportDocumentsError),
    ListError(ListDocumentsError),
    FeedFileError(GetFeedFileError),
    InvalidQuery(QueryRejection),
}

impl From<ImportDocumentsError> for DocumentApiError {
    fn from(err: ImportDocumentsError) -> Self {
        Self::ImportError(err)
    }
}

impl From<ListDocumentsError> for DocumentApiError {
    fn from(err: ListDocumentsError) -> Self {
        Self::ListError(err)
    }
}

impl From<QueryRejection> for DocumentApiError {
    fn from(err: QueryRejection) -> Self {
        Self::InvalidQuery(err)
    }
}

impl From<GetFeedFileError> for DocumentApiError {
    fn from(err: GetFeedFileError) -> Self {
        Self::FeedFileError(err)
    }
}

fn internal_error(err: &dyn std::fmt::Display) -> Response {
    tracing::error!("Database error: {}", err);
    let error = ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
}

impl IntoResponse for DocumentApiError {
    fn into_response(self) -> Response {
        match self {
            // Import errors
            DocumentApiError::ImportError(ImportDocumentsError::Ingest(err)) => match &err {
                IngestError::MalformedInput(_) => {
                    let error = ErrorResponse::new("MALFORMED_FEED", err.to_string());
                    (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
                },
                IngestError::Validation { ordinal, source } => {
                    let error = ErrorResponse::with_details(
                        "VALIDATION_ERROR",
                        err.to_string(),
                        json!({ "record": ordinal, "field": source.field() }),
                    );
                    (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
                },
                IngestError::Transport(_) => {
                    let error = ErrorResponse::new("FEED_UNAVAILABLE", err.to_string());
                    (StatusCode::BAD_GATEWAY, Json(error)).into_response()
                },
                IngestError::Storage(e) => internal_error(e),
            },

            // List errors
            DocumentApiError::ListError(ListDocumentsError::Database(e)) => internal_error(&e),
            DocumentApiError::ListError(err) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", err.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            DocumentApiError::InvalidQuery(rejection) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", rejection.body_text());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },

            // Feed file errors
            DocumentApiError::FeedFileError(err @ GetFeedFileError::NotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", err.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            DocumentApiError::FeedFileError(GetFeedFileError::Io(e)) => {
                tracing::error!("Failed to read feed file: {}", e);
                let error = ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}
