/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use itdocs_models::models::{NewRelation, ObjectType};
use itdocs_server::dal::DalError;

use crate::fixtures::TestFixture;

#[test]
fn test_relation_directions() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let web = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");
    let db = fixture.insert_test_object(dc.id, ObjectType::Server, "DB");

    let relation = fixture
        .dal
        .relations()
        .create(&NewRelation::new(web.id, db.id, None, Some("primary".to_string())).unwrap())
        .expect("Failed to create relation");
    assert_eq!(relation.relation_type, "depends");
    assert_eq!(relation.note, "primary");

    assert_eq!(fixture.dal.relations().list_outgoing(web.id).unwrap(), vec![relation.clone()]);
    assert_eq!(fixture.dal.relations().list_incoming(db.id).unwrap(), vec![relation]);
    assert!(fixture.dal.relations().list_outgoing(db.id).unwrap().is_empty());
}

#[test]
fn test_self_relation_is_rejected() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let web = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");

    let relation = NewRelation {
        src_object_id: web.id,
        dst_object_id: web.id,
        relation_type: "depends".to_string(),
        note: String::new(),
    };

    let result = fixture.dal.relations().create(&relation);
    assert!(matches!(result, Err(DalError::Validation(_))));
}

#[test]
fn test_duplicate_relation_is_constraint_error() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let web = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");
    let db = fixture.insert_test_object(dc.id, ObjectType::Server, "DB");

    let relation = NewRelation::new(web.id, db.id, Some("uses".to_string()), None).unwrap();
    fixture.dal.relations().create(&relation).unwrap();

    let result = fixture.dal.relations().create(&relation);
    assert!(matches!(result, Err(DalError::Constraint(_))));
}
