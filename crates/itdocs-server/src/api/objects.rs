/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::api::{api_error, dal_error, ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use itdocs_models::models::objects::ObjectDetail;
use itdocs_utils::logging::prelude::*;

/// Returns an object with its pages, outgoing relations, documents and incidents.
pub async fn get_object(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ObjectDetail>, ApiError> {
    info!("Handling request to get object with ID: {}", id);

    match state.dal.objects().get_detail(id) {
        Ok(Some(detail)) => Ok(Json(detail)),
        Ok(None) => {
            warn!("Object not found with ID: {}", id);
            Err(api_error(StatusCode::NOT_FOUND, "Object not found"))
        }
        Err(e) => Err(dal_error("fetch object", e)),
    }
}
