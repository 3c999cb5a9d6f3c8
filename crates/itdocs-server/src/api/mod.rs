/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # HTTP API
//!
//! Read endpoints are public. Writing a page or attaching a document requires a
//! bearer key issued by `/api/auth/login` and at least the editor role.
//! Uploaded files are served under `/uploads`, the bundled front end under
//! `/static`, and every other path falls back to its `index.html`.

pub mod auth;
mod catalog;
mod documents;
pub mod middleware;
mod objects;
mod pages;

use crate::dal::{DalError, DAL};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use itdocs_utils::config::Cors;
use itdocs_utils::logging::prelude::*;
use itdocs_utils::Settings;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Largest accepted document upload.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dal: DAL,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(dal: DAL, settings: Settings) -> Self {
        AppState {
            dal,
            settings: Arc::new(settings),
        }
    }
}

/// Error half of every handler result: a status and `{"error": "..."}`.
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": message })))
}

/// Maps a storage failure to a response. Constraint and validation failures
/// are the caller's fault; everything else is ours.
pub(crate) fn dal_error(action: &str, err: DalError) -> ApiError {
    match err {
        DalError::Validation(message) => {
            warn!("Rejected request to {}: {}", action, message);
            api_error(StatusCode::BAD_REQUEST, &message)
        }
        DalError::Constraint(message) => {
            warn!("Constraint violation while trying to {}: {}", action, message);
            api_error(StatusCode::CONFLICT, &message)
        }
        other => {
            error!("Failed to {}: {:?}", action, other);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to {}", action),
            )
        }
    }
}

/// Configures the complete application router.
///
/// # Arguments
///
/// * `state` - Shared state; also used by the bearer-key middleware
///
/// # Returns
///
/// A router serving the API, uploads and the front end, with CORS applied.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let require_user = || from_fn_with_state(state.clone(), middleware::auth_middleware);
    let settings = state.settings.clone();

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me).route_layer(require_user()))
        .route("/api/companies", get(catalog::list_companies))
        .route("/api/tree", get(catalog::get_tree))
        .route("/api/objects/:id", get(objects::get_object))
        .route(
            "/api/objects/:id/documents",
            get(documents::list_documents).merge(
                post(documents::create_document)
                    .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
                    .route_layer(require_user()),
            ),
        )
        .route(
            "/api/pages/:id",
            put(pages::update_page).route_layer(require_user()),
        )
        .route("/healthz", get(healthz))
        .nest_service("/uploads", ServeDir::new(&settings.storage.upload_dir))
        .nest_service("/static", ServeDir::new(&settings.storage.static_dir))
        .fallback_service(ServeFile::new(settings.storage.static_dir.join("index.html")))
        .layer(cors_layer(&settings.cors))
}

/// Builds the CORS layer from configuration. `"*"` allows any origin.
pub fn cors_layer(cors: &Cors) -> CorsLayer {
    let origins = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors.max_age_seconds))
}

/// Health check endpoint handler.
async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
