/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Login and identity endpoints.

use crate::api::middleware::AuthPayload;
use crate::api::{api_error, ApiError, AppState};
use crate::utils::{pak, password};
use axum::{
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Extension, Form, Json,
};
use itdocs_models::models::users::UserOut;
use itdocs_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};

/// Login credentials, accepted as JSON or as an urlencoded form.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued bearer key.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

async fn read_credentials(state: &AppState, request: Request) -> Result<LoginRequest, ApiError> {
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    let parsed = if is_json {
        Json::<LoginRequest>::from_request(request, state)
            .await
            .map(|Json(body)| body)
            .map_err(|e| e.body_text())
    } else {
        Form::<LoginRequest>::from_request(request, state)
            .await
            .map(|Form(body)| body)
            .map_err(|e| e.body_text())
    };

    parsed.map_err(|message| {
        warn!("Malformed login request: {}", message);
        api_error(StatusCode::UNPROCESSABLE_ENTITY, "username and password are required")
    })
}

/// Exchanges a username and password for a bearer key.
///
/// Issuing a key replaces the user's previous one.
pub async fn login(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<TokenResponse>, ApiError> {
    let credentials = read_credentials(&state, request).await?;
    info!("Handling login for user {}", credentials.username);

    let user = state
        .dal
        .users()
        .get_by_username(&credentials.username)
        .map_err(|e| {
            error!("Failed to fetch user {}: {:?}", credentials.username, e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to log in")
        })?;

    let user = match user {
        Some(user) if password::verify_password(&credentials.password, &user.password_hash) => {
            user
        }
        _ => {
            warn!("Failed login attempt for user {}", credentials.username);
            return Err(api_error(
                StatusCode::UNAUTHORIZED,
                "Incorrect username or password",
            ));
        }
    };

    let (key, hash) = pak::create_pak(&state.settings).map_err(|e| {
        error!("Failed to create bearer key: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to log in")
    })?;

    state
        .dal
        .users()
        .update_pak_hash(user.id, hash)
        .map_err(|e| {
            error!("Failed to store bearer key for user {}: {:?}", user.id, e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to log in")
        })?;

    info!("User {} logged in", user.username);
    Ok(Json(TokenResponse {
        access_token: key,
        token_type: "bearer".to_string(),
    }))
}

/// Returns the authenticated user without secrets.
pub async fn me(Extension(auth_payload): Extension<AuthPayload>) -> Json<UserOut> {
    Json(UserOut::from(&auth_payload.user))
}
