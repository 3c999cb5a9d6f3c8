/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::api::middleware::AuthPayload;
use crate::api::{api_error, dal_error, ApiError, AppState};
use crate::authz;
use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    Json,
};
use itdocs_models::models::pages::{Page, PageUpdate};
use itdocs_models::models::users::Role;
use itdocs_utils::logging::prelude::*;

/// Replaces a page's content. Requires the editor role.
pub async fn update_page(
    State(state): State<AppState>,
    Extension(auth_payload): Extension<AuthPayload>,
    Path(id): Path<i32>,
    payload: Result<Json<PageUpdate>, JsonRejection>,
) -> Result<Json<Page>, ApiError> {
    info!(
        "Handling request from {} to update page {}",
        auth_payload.user.username, id
    );

    if let Err(denied) = authz::require(Role::Editor, auth_payload.user.role) {
        warn!("Unauthorized attempt to update page {}: {}", id, denied);
        return Err(api_error(StatusCode::FORBIDDEN, "Insufficient permissions"));
    }

    let Json(update) = payload.map_err(|e| {
        warn!("Rejected update for page {}: {}", id, e.body_text());
        api_error(e.status(), "Expected a JSON body with content_md")
    })?;

    match state
        .dal
        .pages()
        .update_content(id, &update.content_md, auth_payload.user.id)
    {
        Ok(Some(page)) => Ok(Json(page)),
        Ok(None) => {
            warn!("Page not found with ID: {}", id);
            Err(api_error(StatusCode::NOT_FOUND, "Page not found"))
        }
        Err(e) => Err(dal_error("update page", e)),
    }
}
