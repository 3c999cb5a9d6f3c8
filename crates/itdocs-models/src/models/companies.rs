/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Companies Module
//!
//! A company is the root of the catalog graph. It owns datacenters, and deleting
//! it removes everything beneath it.
//!
//! - `id`: i32 - Unique identifier assigned by the database
//! - `name`: String - Unique company name

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a company in the catalog.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Company {
    /// Unique identifier for the company
    pub id: i32,
    /// Unique name of the company
    pub name: String,
}

/// Represents a new company to be inserted into the database.
#[derive(Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::companies)]
pub struct NewCompany {
    /// Unique name of the company
    pub name: String,
}

impl NewCompany {
    /// Creates a new `NewCompany`, rejecting blank names.
    pub fn new(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Company name cannot be empty".to_string());
        }
        Ok(NewCompany { name })
    }
}
