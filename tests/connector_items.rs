//! End-to-end item building for a configured connector
//!
//! Loads configuration from YAML and the schema from JSON, then builds items
//! for several documents the way a connector's indexing loop would.

mod common;

use common::{connector_context, document_values};
use indexkit::{
    Configuration, FieldOrValue, IndexingContext, IndexingError, ItemBuilder, ItemType,
    SearchQualityMetadata,
};
use serde_json::json;
use std::io::Write;

#[test]
fn test_document_from_configuration() {
    let ctx = connector_context();

    let item = ItemBuilder::from_configuration("docs/42", &ctx)
        .unwrap()
        .with_values(document_values(json!({})))
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({
            "name": "docs/42",
            "metadata": {
                "title": "Quarterly report",
                "sourceRepositoryUrl": "http://example.com/docs/42",
                "objectType": "document",
                "mimeType": "text/html",
                "contentLanguage": "en-US",
                "updateTime": "2018-08-08T15:48:17.000Z",
                "createTime": "2017-07-07T01:02:03.000Z"
            },
            "structuredData": {
                "object": {
                    "properties": [
                        { "name": "author", "textValues": { "values": ["Ann", "Bob"] } },
                        { "name": "pages", "integerValues": { "values": [12] } },
                        { "name": "published", "dateValues": { "values": [
                            { "year": 2018, "month": 8, "day": 1 }
                        ] } }
                    ]
                }
            }
        })
    );
}

#[test]
fn test_bad_document_dates_do_not_block_batch() {
    let ctx = connector_context();
    let batch = vec![
        ("docs/1", document_values(json!({}))),
        ("docs/2", document_values(json!({ "modified": "sometime last year", "created": "n/a" }))),
        ("docs/3", document_values(json!({ "modified": null, "subject": null }))),
    ];

    let items: Vec<_> = batch
        .into_iter()
        .map(|(name, values)| {
            ItemBuilder::from_configuration(name, &ctx)
                .unwrap()
                .with_values(values)
                .build()
                .unwrap()
        })
        .collect();

    let canonical = |t: Option<indexkit::Timestamp>| t.map(|t| t.to_canonical());

    assert_eq!(
        canonical(items[0].metadata.update_time).as_deref(),
        Some("2018-08-08T15:48:17.000Z")
    );
    // Unparseable field value falls back to the configured default value
    assert_eq!(
        canonical(items[1].metadata.update_time).as_deref(),
        Some("2001-01-01T00:00:00.000Z")
    );
    // No default value for createTime, so it is omitted
    assert!(items[1].metadata.create_time.is_none());
    assert_eq!(
        canonical(items[2].metadata.update_time).as_deref(),
        Some("2001-01-01T00:00:00.000Z")
    );
    assert_eq!(items[2].metadata.title.as_deref(), Some("Untitled"));
}

#[test]
fn test_setters_override_connector_configuration() {
    let ctx = connector_context();

    let item = ItemBuilder::from_configuration("docs/42", &ctx)
        .unwrap()
        .with_values(document_values(json!({ "lang": ["fr-FR", "de-DE"] })))
        .with_item_type(ItemType::ContentItem)
        .with_queue("documents")
        .with_version(b"v7".to_vec())
        .with_title("Pinned title")
        .with_content_language(FieldOrValue::field("lang"))
        .with_mime_type(FieldOrValue::value(""))
        .clear_source_repository_url()
        .with_search_quality_metadata(SearchQualityMetadata::new(0.9))
        .build()
        .unwrap();

    assert_eq!(item.item_type, Some(ItemType::ContentItem));
    assert_eq!(item.queue.as_deref(), Some("documents"));
    assert_eq!(item.decode_version(), Some(b"v7".to_vec()));
    assert_eq!(item.metadata.title.as_deref(), Some("Pinned title"));
    assert_eq!(item.metadata.content_language.as_deref(), Some("fr-FR"));
    assert_eq!(item.metadata.mime_type.as_deref(), Some(""));
    assert!(item.metadata.source_repository_url.is_none());
    assert_eq!(
        item.metadata.search_quality_metadata,
        Some(SearchQualityMetadata::new(0.9))
    );
}

#[test]
fn test_folder_object_type_has_empty_payload() {
    let ctx = connector_context();

    let item = ItemBuilder::from_configuration("folders/a", &ctx)
        .unwrap()
        .with_item_type(ItemType::ContainerItem)
        .with_object_type("folder")
        .with_values(document_values(json!({})))
        .build()
        .unwrap();

    assert_eq!(item.metadata.object_type.as_deref(), Some("folder"));
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["structuredData"], json!({ "object": {} }));
}

#[test]
fn test_schema_violation_fails_only_that_item() {
    let ctx = connector_context();

    let bad = ItemBuilder::from_configuration("docs/bad", &ctx)
        .unwrap()
        .with_values(document_values(json!({ "pages": "many" })))
        .build();
    assert!(matches!(bad, Err(IndexingError::SchemaValidation(_))));

    let good = ItemBuilder::from_configuration("docs/good", &ctx)
        .unwrap()
        .with_values(document_values(json!({})))
        .build();
    assert!(good.is_ok());
}

#[test]
fn test_unknown_object_type_in_configuration() {
    let mut ctx = connector_context();
    ctx.init_config(&Configuration::from_pairs([("itemMetadata.objectType", "ticket")]))
        .unwrap();

    let err = ItemBuilder::from_configuration("t/1", &ctx)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("ticket"));
}

#[test]
fn test_malformed_config_file_fails_at_init() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "itemMetadata:\n  createTime:\n    defaultValue: not-a-date").unwrap();

    let config = Configuration::from_file(file.path()).unwrap();
    let mut ctx = IndexingContext::new();
    let err = ctx.init_config(&config).unwrap_err();

    match err {
        IndexingError::ConfigFormat { key, value } => {
            assert_eq!(key, "itemMetadata.createTime.defaultValue");
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected ConfigFormat, got {:?}", other),
    }
    assert!(!ctx.is_config_initialized());
}

#[test]
fn test_reset_context_between_cases() {
    let mut ctx = connector_context();
    ctx.reset();

    assert!(matches!(
        ItemBuilder::from_configuration("docs/1", &ctx),
        Err(IndexingError::NotInitialized(_))
    ));

    ctx.init_config(&Configuration::new()).unwrap();
    let item = ItemBuilder::from_configuration("docs/1", &ctx)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "name": "docs/1", "metadata": {} }));
}
