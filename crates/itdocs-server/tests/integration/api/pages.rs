/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use itdocs_models::models::{ObjectType, PageSection, Role};
use serde_json::json;
use tower::ServiceExt;

use super::json_body;
use crate::fixtures::TestFixture;

async fn put_page(
    app: &Router,
    page_id: i32,
    token: Option<&str>,
    body: serde_json::Value,
) -> axum::http::Response<Body> {
    let mut request = Request::builder()
        .method("PUT")
        .uri(format!("/api/pages/{}", page_id))
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }
    app.clone()
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

fn overview_page_id(fixture: &TestFixture) -> i32 {
    let company = fixture.insert_test_company("Acme");
    let dc = fixture.insert_test_datacenter(company.id, "DC1");
    let object = fixture.insert_test_object(dc.id, ObjectType::Service, "Web");
    fixture
        .dal
        .pages()
        .get_by_section(object.id, PageSection::Overview)
        .unwrap()
        .unwrap()
        .id
}

#[tokio::test]
async fn test_editor_updates_page() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let page_id = overview_page_id(&fixture);
    let editor = fixture.insert_test_user(Role::Editor, "secret");
    let token = fixture.login(&app, &editor, "secret").await;

    let response = put_page(&app, page_id, Some(&token), json!({"content_md": "# Hello"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["id"], page_id);
    assert_eq!(body["content_md"], "# Hello");
    assert_eq!(body["updated_by"], editor.id);

    let stored = fixture.dal.pages().get(page_id).unwrap().unwrap();
    assert_eq!(stored.content_md, "# Hello");
    assert_eq!(stored.updated_by, Some(editor.id));
}

#[tokio::test]
async fn test_admin_updates_page() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let page_id = overview_page_id(&fixture);
    let admin = fixture.insert_test_user(Role::Admin, "secret");
    let token = fixture.login(&app, &admin, "secret").await;

    let response = put_page(&app, page_id, Some(&token), json!({"content_md": ""})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["content_md"], "");
}

#[tokio::test]
async fn test_viewer_cannot_update_page() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let page_id = overview_page_id(&fixture);
    let viewer = fixture.insert_test_user(Role::Viewer, "secret");
    let token = fixture.login(&app, &viewer, "secret").await;

    let response = put_page(&app, page_id, Some(&token), json!({"content_md": "nope"})).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["error"], "Insufficient permissions");

    let stored = fixture.dal.pages().get(page_id).unwrap().unwrap();
    assert_eq!(stored.content_md, "");
    assert_eq!(stored.updated_by, None);
}

#[tokio::test]
async fn test_update_page_requires_token() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let page_id = overview_page_id(&fixture);

    let response = put_page(&app, page_id, None, json!({"content_md": "anon"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_unknown_page() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let editor = fixture.insert_test_user(Role::Editor, "secret");
    let token = fixture.login(&app, &editor, "secret").await;

    let response = put_page(&app, 999_999_999, Some(&token), json!({"content_md": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Page not found");
}

async fn put_raw_page(
    app: &Router,
    page_id: i32,
    token: &str,
    body: &str,
) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/pages/{}", page_id))
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_viewer_with_malformed_body_is_forbidden() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let page_id = overview_page_id(&fixture);
    let viewer = fixture.insert_test_user(Role::Viewer, "secret");
    let token = fixture.login(&app, &viewer, "secret").await;

    let response = put_raw_page(&app, page_id, &token, "not json").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["error"], "Insufficient permissions");
}

#[tokio::test]
async fn test_editor_with_malformed_body_is_rejected() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let page_id = overview_page_id(&fixture);
    let editor = fixture.insert_test_user(Role::Editor, "secret");
    let token = fixture.login(&app, &editor, "secret").await;

    let response = put_raw_page(&app, page_id, &token, "not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_raw_page(&app, page_id, &token, r#"{"title": "x"}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["error"],
        "Expected a JSON body with content_md"
    );

    let stored = fixture.dal.pages().get(page_id).unwrap().unwrap();
    assert_eq!(stored.content_md, "");
}
