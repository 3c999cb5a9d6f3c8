/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Users Module
//!
//! Catalog users. Passwords are only ever held as a salted hash, and the bearer
//! key issued at login is likewise stored only as a hash. Neither is serialized.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

text_enum! {
    /// Permission level of a user, ordered viewer < editor < admin.
    pub enum Role {
        Admin => "admin",
        Editor => "editor",
        Viewer => "viewer",
    }
}

impl Role {
    /// Position of the role in the permission ordering.
    pub fn rank(&self) -> u8 {
        match self {
            Role::Viewer => 0,
            Role::Editor => 1,
            Role::Admin => 2,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Viewer
    }
}

/// Represents a user account.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub full_name: String,
    /// Hash of the most recently issued bearer key
    #[serde(skip_serializing)]
    pub pak_hash: Option<String>,
    /// When the bearer key was issued
    #[serde(skip_serializing)]
    pub pak_issued_at: Option<DateTime<Utc>>,
}

/// Represents a new user to be inserted into the database.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub full_name: String,
}

impl NewUser {
    /// Creates a new `NewUser` from an already hashed password.
    pub fn new(
        username: String,
        password_hash: String,
        role: Role,
        full_name: String,
    ) -> Result<Self, String> {
        if username.trim().is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if password_hash.is_empty() {
            return Err("Password hash cannot be empty".to_string());
        }

        Ok(NewUser {
            username,
            password_hash,
            role,
            full_name,
        })
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOut {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

impl From<&User> for UserOut {
    fn from(user: &User) -> Self {
        UserOut {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        }
    }
}
