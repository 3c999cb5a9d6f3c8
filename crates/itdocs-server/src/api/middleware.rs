/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Bearer-key authentication middleware.
//!
//! Resolves `Authorization: Bearer <pak>` to a user and adds an [`AuthPayload`]
//! to the request's extensions. Missing, unknown and expired keys are answered
//! with 401 before the handler runs.

use crate::api::{api_error, ApiError, AppState};
use crate::utils::pak;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use itdocs_models::models::users::User;
use itdocs_utils::logging::prelude::*;

/// The authenticated user.
#[derive(Clone, Debug)]
pub struct AuthPayload {
    pub user: User,
}

/// Middleware function for authenticating requests.
///
/// # Arguments
///
/// * `state` - Application state holding the DAL and settings
/// * `request` - The incoming HTTP request
/// * `next` - The next middleware in the chain
///
/// # Returns
///
/// The downstream response, or 401 if no valid key was presented.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = match request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .map(bearer_token)
    {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => {
            warn!("Authorization header missing or invalid");
            return Err(unauthorized());
        }
    };

    match verify_token(&state, &token)? {
        Some(user) => {
            debug!("Authenticated user {}", user.username);
            request.extensions_mut().insert(AuthPayload { user });
            Ok(next.run(request).await)
        }
        None => {
            warn!("Bearer key verification failed");
            Err(unauthorized())
        }
    }
}

fn bearer_token(header: &str) -> &str {
    let header = header.trim();
    match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => header,
    }
}

fn unauthorized() -> ApiError {
    api_error(StatusCode::UNAUTHORIZED, "Could not validate credentials")
}

/// Finds the user holding `token`, provided it has not outlived the configured TTL.
fn verify_token(state: &AppState, token: &str) -> Result<Option<User>, ApiError> {
    let users = state.dal.users().list_with_tokens().map_err(|e| {
        error!("Failed to fetch users with issued keys: {:?}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to verify credentials")
    })?;

    let ttl = Duration::minutes(state.settings.auth.token_ttl_minutes);
    let now = Utc::now();

    for user in users {
        let Some(hash) = user.pak_hash.as_deref() else {
            continue;
        };
        if !pak::verify_pak(&state.settings, token, hash) {
            continue;
        }

        return match user.pak_issued_at {
            Some(issued_at) if issued_at + ttl > now => Ok(Some(user)),
            _ => {
                info!("Rejected expired key for user {}", user.username);
                Ok(None)
            }
        };
    }
    Ok(None)
}
