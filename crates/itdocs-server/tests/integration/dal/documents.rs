/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use itdocs_models::models::{DocumentKind, NewDocument, ObjectType};
use itdocs_server::dal::DalError;

use crate::fixtures::TestFixture;

#[test]
fn test_create_then_list_documents_round_trips() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let object = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");

    let link = NewDocument::new(
        object.id,
        "Vendor manual".to_string(),
        DocumentKind::Link,
        None,
        Some("https://example.com/manual".to_string()),
    )
    .unwrap();
    let file = NewDocument::new(
        object.id,
        "Rack photo".to_string(),
        DocumentKind::File,
        Some("data/uploads/rack.jpg".to_string()),
        None,
    )
    .unwrap();

    let created_link = fixture.dal.documents().create(&link).expect("Failed to create link");
    let created_file = fixture.dal.documents().create(&file).expect("Failed to create file");

    assert_eq!(created_link.title, link.title);
    assert_eq!(created_link.kind, DocumentKind::Link);
    assert_eq!(created_link.url, link.url);
    assert_eq!(created_link.file_path, None);
    assert_eq!(created_file.file_path, file.file_path);
    assert_eq!(created_file.kind, DocumentKind::File);

    let listed = fixture.dal.documents().list_for_object(object.id).unwrap();
    assert_eq!(listed, vec![created_link, created_file]);
}

#[test]
fn test_list_documents_for_unknown_object_is_empty() {
    let fixture = TestFixture::new();
    assert!(fixture.dal.documents().list_for_object(-1).unwrap().is_empty());
}

#[test]
fn test_mismatched_kind_is_validation_error() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let object = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");

    let document = NewDocument {
        object_id: object.id,
        title: "Broken".to_string(),
        file_path: None,
        url: Some("https://example.com".to_string()),
        kind: DocumentKind::File,
    };

    let result = fixture.dal.documents().create(&document);
    assert!(matches!(result, Err(DalError::Validation(_))));
    assert!(fixture.dal.documents().list_for_object(object.id).unwrap().is_empty());
}

#[test]
fn test_document_for_unknown_object_is_constraint_error() {
    let fixture = TestFixture::new();

    let document = NewDocument::new(
        -1,
        "Nowhere".to_string(),
        DocumentKind::Link,
        None,
        Some("https://example.com".to_string()),
    )
    .unwrap();

    let result = fixture.dal.documents().create(&document);
    assert!(matches!(result, Err(DalError::Constraint(_))));
}
