/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Role-based authorization.
//!
//! Roles are ordered viewer < editor < admin. A check passes when the actual role
//! is at least the required one. These functions never touch storage; request
//! handlers consult them before calling a mutating DAL operation.

use itdocs_models::models::users::Role;
use thiserror::Error;

/// Authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("role {actual} is not permitted; {required} required")]
    Denied { required: Role, actual: Role },
}

/// Returns true if `actual` is at least `required`.
pub fn permits(required: Role, actual: Role) -> bool {
    actual.rank() >= required.rank()
}

/// Like [`permits`], but reports the denial as an error.
pub fn require(required: Role, actual: Role) -> Result<(), AuthzError> {
    if permits(required, actual) {
        Ok(())
    } else {
        Err(AuthzError::Denied { required, actual })
    }
}
