/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::api::{dal_error, ApiError, AppState};
use axum::{extract::State, Json};
use itdocs_models::models::companies::Company;
use itdocs_models::models::tree::TreeResponse;
use itdocs_utils::logging::prelude::*;

pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state
        .dal
        .companies()
        .list()
        .map_err(|e| dal_error("list companies", e))?;

    debug!("Listing {} companies", companies.len());
    Ok(Json(companies))
}

/// Returns the whole Company -> Datacenter -> Object tree.
pub async fn get_tree(State(state): State<AppState>) -> Result<Json<TreeResponse>, ApiError> {
    let tree = state
        .dal
        .tree()
        .get()
        .map_err(|e| dal_error("build the catalog tree", e))?;
    Ok(Json(tree))
}
