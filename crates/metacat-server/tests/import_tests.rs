//! Integration tests for the feed import pipeline

use metacat_server::db::{list_documents, DocumentFilter, SortField, SortOrder};
use metacat_server::ingest::{import_documents, import_feed, parse_feed, IngestError};

mod helpers;
use helpers::{document_count, feed, four_document_feed, setup_test_db, DocumentFixture};

#[tokio::test]
async fn test_import_inserts_every_record() {
    let pool = setup_test_db().await;

    let stats = import_feed(&pool, &four_document_feed()).await.unwrap();

    assert_eq!(stats.inserted, 4);
    assert_eq!(stats.updated, 0);
    assert_eq!(document_count(&pool).await, 4);
}

#[tokio::test]
async fn test_empty_feed_imports_nothing() {
    let pool = setup_test_db().await;

    let stats = import_feed(&pool, "<documents></documents>").await.unwrap();

    assert_eq!(stats.processed(), 0);
    assert_eq!(document_count(&pool).await, 0);
}

#[tokio::test]
async fn test_reimport_is_idempotent_and_takes_new_values() {
    let pool = setup_test_db().await;
    let url = "https://example.com/docs/0001.pdf";

    import_feed(&pool, &feed(&[DocumentFixture::new(url).title("Pirmā versija")]))
        .await
        .unwrap();

    let second = feed(&[DocumentFixture::new(url)
        .title("Otrā versija")
        .importance("kritisks")
        .active("nē")]);
    let stats = import_feed(&pool, &second).await.unwrap();

    assert_eq!(stats.inserted, 0);
    assert_eq!(stats.updated, 1);
    assert_eq!(document_count(&pool).await, 1);

    let documents = list_documents(&pool, &DocumentFilter::default()).await.unwrap();
    assert_eq!(documents[0].title, "Otrā versija");
    assert_eq!(documents[0].importance, "critical");
    assert!(!documents[0].active);
}

#[tokio::test]
async fn test_same_feed_twice_keeps_row_count() {
    let pool = setup_test_db().await;

    import_feed(&pool, &four_document_feed()).await.unwrap();
    let stats = import_feed(&pool, &four_document_feed()).await.unwrap();

    assert_eq!(stats.updated, 4);
    assert_eq!(document_count(&pool).await, 4);
}

#[tokio::test]
async fn test_invalid_record_persists_nothing() {
    let pool = setup_test_db().await;
    let xml = feed(&[
        DocumentFixture::new("https://example.com/docs/a.pdf"),
        DocumentFixture::new("https://example.com/docs/b.pdf").importance("ļoti svarīgs"),
        DocumentFixture::new("https://example.com/docs/c.pdf"),
    ]);

    let err = import_feed(&pool, &xml).await.unwrap_err();

    assert_eq!(err.ordinal(), Some(2));
    assert_eq!(err.field(), Some("importance"));
    assert_eq!(document_count(&pool).await, 0);
}

#[tokio::test]
async fn test_error_names_third_record_and_field() {
    let pool = setup_test_db().await;
    let xml = feed(&[
        DocumentFixture::new("https://example.com/docs/a.pdf"),
        DocumentFixture::new("https://example.com/docs/b.pdf"),
        DocumentFixture::new("https://example.com/docs/c.pdf").importance("high"),
    ]);

    let err = import_feed(&pool, &xml).await.unwrap_err();

    assert!(matches!(err, IngestError::Validation { ordinal: 3, .. }));
    let message = err.to_string();
    assert!(message.contains("#3"));
    assert!(message.contains("importance"));
    assert!(message.contains("'high'"));
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let pool = setup_test_db().await;
    let xml = feed(&[DocumentFixture::new("unused").without("url")]);

    let err = import_feed(&pool, &xml).await.unwrap_err();

    assert_eq!(err.field(), Some("url"));
    assert!(err.to_string().contains("url"));
    assert_eq!(document_count(&pool).await, 0);
}

#[tokio::test]
async fn test_disallowed_file_type_names_value_and_allowed_set() {
    let pool = setup_test_db().await;
    let xml = feed(&[DocumentFixture::new("https://example.com/docs/a.exe").file_type("exe")]);

    let err = import_feed(&pool, &xml).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("exe"));
    for allowed in ["pdf", "docx", "xlsx", "html"] {
        assert!(message.contains(allowed), "missing {}", allowed);
    }
}

#[tokio::test]
async fn test_malformed_feed_is_not_a_validation_error() {
    let pool = setup_test_db().await;

    let err = import_feed(&pool, "<not-valid-xml").await.unwrap_err();

    assert!(matches!(err, IngestError::MalformedInput(_)));
    assert_eq!(err.ordinal(), None);
    assert_eq!(document_count(&pool).await, 0);
}

#[tokio::test]
async fn test_four_document_scenario() {
    let pool = setup_test_db().await;
    import_feed(&pool, &four_document_feed()).await.unwrap();

    assert_eq!(document_count(&pool).await, 4);

    let inactive = list_documents(
        &pool,
        &DocumentFilter {
            active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].title, "Augsts");
    assert_eq!(inactive[0].category, "internal");

    let ascending = list_documents(
        &pool,
        &DocumentFilter {
            sort: SortField::Importance,
            order: SortOrder::Asc,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let levels: Vec<_> = ascending.iter().map(|d| d.importance.as_str()).collect();
    assert_eq!(levels, ["low", "medium", "high", "critical"]);

    let descending = list_documents(
        &pool,
        &DocumentFilter {
            sort: SortField::Importance,
            order: SortOrder::Desc,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let levels: Vec<_> = descending.iter().map(|d| d.importance.as_str()).collect();
    assert_eq!(levels, ["critical", "high", "medium", "low"]);
}

#[tokio::test]
async fn test_storage_failure_rolls_back_whole_batch() {
    let pool = setup_test_db().await;
    sqlx::query(
        "CREATE TRIGGER reject_poison BEFORE INSERT ON documents \
         WHEN NEW.title = 'poison' \
         BEGIN SELECT RAISE(ABORT, 'poisoned row'); END;",
    )
    .execute(&pool)
    .await
    .unwrap();

    let records = parse_feed(&feed(&[
        DocumentFixture::new("https://example.com/docs/a.pdf"),
        DocumentFixture::new("https://example.com/docs/b.pdf").title("poison"),
        DocumentFixture::new("https://example.com/docs/c.pdf"),
    ]))
    .unwrap();

    let err = import_documents(&pool, &records).await.unwrap_err();

    assert!(matches!(err, IngestError::Storage(_)));
    assert_eq!(document_count(&pool).await, 0);
}

#[tokio::test]
async fn test_date_range_filter_is_inclusive() {
    let pool = setup_test_db().await;
    import_feed(&pool, &four_document_feed()).await.unwrap();

    let documents = list_documents(
        &pool,
        &DocumentFilter {
            created_from: chrono::NaiveDate::from_ymd_opt(2024, 2, 10),
            created_to: chrono::NaiveDate::from_ymd_opt(2024, 3, 10),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let titles: Vec<_> = documents.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["Augsts", "Zems"]);
}
