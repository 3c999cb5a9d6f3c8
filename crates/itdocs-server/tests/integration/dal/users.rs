/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use itdocs_models::models::{NewUser, Role};
use itdocs_server::dal::DalError;
use itdocs_server::utils::password::verify_password;

use crate::fixtures::TestFixture;

#[test]
fn test_create_and_lookup_user() {
    let fixture = TestFixture::new();
    let user = fixture.insert_test_user(Role::Viewer, "hunter2");

    let by_name = fixture
        .dal
        .users()
        .get_by_username(&user.username)
        .unwrap()
        .expect("User should exist");
    assert_eq!(by_name.id, user.id);
    assert_eq!(by_name.role, Role::Viewer);
    assert!(by_name.pak_hash.is_none());
    assert!(verify_password("hunter2", &by_name.password_hash));

    assert!(fixture.dal.users().get(user.id).unwrap().is_some());
    assert!(fixture.dal.users().get_by_username("nobody-here").unwrap().is_none());
}

#[test]
fn test_upsert_replaces_existing_user() {
    let fixture = TestFixture::new();
    let user = fixture.insert_test_user(Role::Viewer, "old");

    let replacement = NewUser::new(
        user.username.clone(),
        itdocs_server::utils::password::hash_password("new").unwrap(),
        Role::Admin,
        "Promoted".to_string(),
    )
    .unwrap();
    let updated = fixture.dal.users().upsert(&replacement).expect("Upsert failed");

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.full_name, "Promoted");
    assert!(verify_password("new", &updated.password_hash));
    assert!(!verify_password("old", &updated.password_hash));
}

#[test]
fn test_update_pak_hash_marks_user_as_token_holder() {
    let fixture = TestFixture::new();
    let user = fixture.insert_test_user(Role::Editor, "secret");

    let before = fixture.dal.users().list_with_tokens().unwrap();
    assert!(before.iter().all(|u| u.id != user.id));

    let updated = fixture
        .dal
        .users()
        .update_pak_hash(user.id, "hashed-key".to_string())
        .unwrap()
        .expect("User should exist");
    assert_eq!(updated.pak_hash.as_deref(), Some("hashed-key"));
    assert!(updated.pak_issued_at.is_some());

    let holders = fixture.dal.users().list_with_tokens().unwrap();
    assert!(holders.iter().any(|u| u.id == user.id));

    assert!(fixture
        .dal
        .users()
        .update_pak_hash(-1, "nobody".to_string())
        .unwrap()
        .is_none());
}

#[test]
fn test_delete_user() {
    let fixture = TestFixture::new();
    let user = fixture.insert_test_user(Role::Viewer, "secret");

    assert_eq!(fixture.dal.users().delete(user.id).unwrap(), 1);
    assert!(fixture.dal.users().get(user.id).unwrap().is_none());
    assert_eq!(fixture.dal.users().delete(user.id).unwrap(), 0);
}

#[test]
fn test_duplicate_username_is_constraint_error() {
    let fixture = TestFixture::new();
    let user = fixture.insert_test_user(Role::Viewer, "secret");

    let duplicate = NewUser::new(
        user.username.clone(),
        user.password_hash.clone(),
        Role::Editor,
        String::new(),
    )
    .unwrap();
    let result = fixture.dal.users().create(&duplicate);
    assert!(matches!(result, Err(DalError::Constraint(_))));
}
