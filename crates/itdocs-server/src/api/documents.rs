/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Document endpoints.
//!
//! Documents are attached with a multipart form carrying `title`, `kind`
//! (`link` unless given), `url` and `file`. The document is validated before
//! anything touches disk. Each upload is then written to the configured upload
//! directory under a fresh name (random prefix plus the sanitized client file
//! name), so a failed request only ever removes the file it wrote itself.

use crate::api::middleware::AuthPayload;
use crate::api::{api_error, dal_error, ApiError, AppState};
use crate::authz;
use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Extension, Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};
use itdocs_models::models::documents::{Document, DocumentKind, NewDocument};
use itdocs_models::models::users::Role;
use itdocs_utils::logging::prelude::*;
use std::path::{Path as FsPath, PathBuf};
use uuid::Uuid;

/// Lists the documents attached to an object.
pub async fn list_documents(
    State(state): State<AppState>,
    Path(object_id): Path<i32>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = state
        .dal
        .documents()
        .list_for_object(object_id)
        .map_err(|e| dal_error("list documents", e))?;
    Ok(Json(documents))
}

/// Fields collected from the multipart body.
#[derive(Default)]
struct DocumentForm {
    title: Option<String>,
    kind: Option<String>,
    url: Option<String>,
    file: Option<(String, Bytes)>,
}

async fn read_form(mut multipart: Multipart) -> Result<DocumentForm, MultipartError> {
    let mut form = DocumentForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "kind" => form.kind = Some(field.text().await?),
            "url" => {
                let url = field.text().await?;
                if !url.trim().is_empty() {
                    form.url = Some(url);
                }
            }
            "file" => {
                let file_name = field.file_name().and_then(sanitize_file_name);
                let data = field.bytes().await?;
                if let Some(file_name) = file_name {
                    form.file = Some((file_name, data));
                }
            }
            other => debug!("Ignoring unexpected form field {}", other),
        }
    }
    Ok(form)
}

/// Reduces a client-supplied file name to its final path component.
fn sanitize_file_name(raw: &str) -> Option<String> {
    let name = raw.rsplit(|c| c == '/' || c == '\\').next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

/// Attaches a link or an uploaded file to an object. Requires the editor role.
pub async fn create_document(
    State(state): State<AppState>,
    Extension(auth_payload): Extension<AuthPayload>,
    Path(object_id): Path<i32>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Document>, ApiError> {
    info!(
        "Handling request from {} to add a document to object {}",
        auth_payload.user.username, object_id
    );

    if let Err(denied) = authz::require(Role::Editor, auth_payload.user.role) {
        warn!("Unauthorized attempt to add a document: {}", denied);
        return Err(api_error(StatusCode::FORBIDDEN, "Insufficient permissions"));
    }

    let multipart = multipart.map_err(|e| {
        warn!("Rejected document upload: {}", e.body_text());
        api_error(StatusCode::BAD_REQUEST, "Expected a multipart form")
    })?;
    let form = read_form(multipart).await.map_err(|e| {
        warn!("Malformed document upload: {}", e.body_text());
        api_error(StatusCode::BAD_REQUEST, "Malformed multipart body")
    })?;

    let title = form
        .title
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "title is required"))?;
    let kind = match form.kind.as_deref() {
        None | Some("") => DocumentKind::Link,
        Some(tag) => tag
            .parse::<DocumentKind>()
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, &e.to_string()))?,
    };

    match state.dal.objects().get(object_id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Object not found with ID: {}", object_id);
            return Err(api_error(StatusCode::NOT_FOUND, "Object not found"));
        }
        Err(e) => return Err(dal_error("fetch object", e)),
    }

    let upload = match (kind, form.file) {
        (DocumentKind::File, Some((file_name, data))) => {
            Some((upload_path(&state.settings.storage.upload_dir, &file_name), data))
        }
        (DocumentKind::File, None) => {
            return Err(api_error(StatusCode::BAD_REQUEST, "file is required"));
        }
        (DocumentKind::Link, _) => None,
    };

    let file_path = upload
        .as_ref()
        .map(|(path, _)| path.to_string_lossy().into_owned());
    let new_document = NewDocument::new(object_id, title, kind, file_path, form.url)
        .map_err(|message| api_error(StatusCode::BAD_REQUEST, &message))?;

    if let Some((path, data)) = &upload {
        store_upload(&state.settings.storage.upload_dir, path, data).await?;
    }

    match state.dal.documents().create(&new_document) {
        Ok(document) => {
            info!("Added {} document {} to object {}", kind, document.id, object_id);
            Ok(Json(document))
        }
        Err(e) => {
            if let Some((path, _)) = upload {
                if let Err(err) = tokio::fs::remove_file(&path).await {
                    warn!("Failed to remove orphaned upload {}: {}", path.display(), err);
                }
            }
            Err(dal_error("create document", e))
        }
    }
}

/// Destination for a new upload. The random prefix keeps earlier uploads of the
/// same name intact.
fn upload_path(upload_dir: &FsPath, file_name: &str) -> PathBuf {
    upload_dir.join(format!("{}_{}", Uuid::new_v4().simple(), file_name))
}

async fn store_upload(upload_dir: &FsPath, dest: &FsPath, data: &[u8]) -> Result<(), ApiError> {
    let write = async {
        tokio::fs::create_dir_all(upload_dir).await?;
        tokio::fs::write(dest, data).await
    };
    write.await.map_err(|e| {
        error!("Failed to write upload {}: {}", dest.display(), e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store file")
    })?;

    debug!("Stored {} bytes at {}", data.len(), dest.display());
    Ok(())
}
