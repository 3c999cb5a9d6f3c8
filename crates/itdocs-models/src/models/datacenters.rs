/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Datacenters Module
//!
//! A datacenter belongs to exactly one company and owns the infrastructure
//! objects located in it.

use crate::models::companies::Company;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a datacenter owned by a company.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::datacenters)]
#[diesel(belongs_to(Company, foreign_key = company_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Datacenter {
    /// Unique identifier for the datacenter
    pub id: i32,
    /// Owning company
    pub company_id: i32,
    /// Display name of the datacenter
    pub name: String,
}

/// Represents a new datacenter to be inserted into the database.
#[derive(Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::datacenters)]
pub struct NewDatacenter {
    /// Owning company
    pub company_id: i32,
    /// Display name of the datacenter
    pub name: String,
}

impl NewDatacenter {
    /// Creates a new `NewDatacenter`, rejecting blank names.
    pub fn new(company_id: i32, name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Datacenter name cannot be empty".to_string());
        }
        Ok(NewDatacenter { company_id, name })
    }
}
