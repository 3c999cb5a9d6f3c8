/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use chrono::Utc;
use itdocs_models::models::{ObjectType, PageSection, Role};

use crate::fixtures::TestFixture;

#[test]
fn test_update_page_content() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let object = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");
    let editor = fixture.insert_test_user(Role::Editor, "secret");

    let page = fixture
        .dal
        .pages()
        .get_by_section(object.id, PageSection::Arch)
        .unwrap()
        .unwrap();
    let before = Utc::now();

    let updated = fixture
        .dal
        .pages()
        .update_content(page.id, "# Architecture\n\nTwo tiers.", editor.id)
        .expect("Failed to update page")
        .expect("Page should exist");

    assert_eq!(updated.id, page.id);
    assert_eq!(updated.section, PageSection::Arch);
    assert_eq!(updated.content_md, "# Architecture\n\nTwo tiers.");
    assert_eq!(updated.updated_by, Some(editor.id));
    assert!(updated.updated_at >= page.updated_at);
    assert!(updated.updated_at <= Utc::now() && updated.updated_at >= before - chrono::Duration::seconds(5));

    let fetched = fixture.dal.pages().get(page.id).unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn test_update_page_allows_empty_content() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let object = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");
    let editor = fixture.insert_test_user(Role::Editor, "secret");
    let page = fixture.dal.pages().list_for_object(object.id).unwrap().remove(0);

    fixture.dal.pages().update_content(page.id, "draft", editor.id).unwrap();
    let cleared = fixture
        .dal
        .pages()
        .update_content(page.id, "", editor.id)
        .unwrap()
        .unwrap();
    assert_eq!(cleared.content_md, "");
}

#[test]
fn test_update_missing_page_writes_nothing() {
    let fixture = TestFixture::new();
    let editor = fixture.insert_test_user(Role::Editor, "secret");

    let result = fixture
        .dal
        .pages()
        .update_content(-1, "lost", editor.id)
        .expect("Update of a missing page is not an error");
    assert!(result.is_none());
}

#[test]
fn test_deleting_editor_clears_updated_by() {
    let fixture = TestFixture::new();
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let object = fixture.insert_test_object(dc.id, ObjectType::Server, "DB");
    let editor = fixture.insert_test_user(Role::Editor, "secret");
    let page = fixture.dal.pages().list_for_object(object.id).unwrap().remove(0);

    fixture.dal.pages().update_content(page.id, "kept", editor.id).unwrap();
    assert_eq!(fixture.dal.users().delete(editor.id).unwrap(), 1);

    let page = fixture.dal.pages().get(page.id).unwrap().unwrap();
    assert_eq!(page.content_md, "kept");
    assert_eq!(page.updated_by, None);
}
