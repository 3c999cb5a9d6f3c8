/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Relations Module
//!
//! Directed edges between two objects (`src` depends on / uses `dst`). An object
//! cannot relate to itself, and the same (src, dst, relation_type) edge exists at
//! most once.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Relation type used when none is given.
pub const DEFAULT_RELATION_TYPE: &str = "depends";

/// Represents a directed relation between two objects.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::relations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Relation {
    pub id: i32,
    pub src_object_id: i32,
    pub dst_object_id: i32,
    pub relation_type: String,
    pub note: String,
}

/// Represents a new relation to be inserted into the database.
#[derive(Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::relations)]
pub struct NewRelation {
    pub src_object_id: i32,
    pub dst_object_id: i32,
    pub relation_type: String,
    pub note: String,
}

impl NewRelation {
    /// Creates a new `NewRelation`.
    ///
    /// # Arguments
    ///
    /// * `src_object_id` - Object the edge leaves from
    /// * `dst_object_id` - Object the edge points to
    /// * `relation_type` - Defaults to "depends" when `None`
    /// * `note` - Defaults to an empty string when `None`
    ///
    /// # Returns
    ///
    /// An error message for self-referential or blank-typed relations.
    pub fn new(
        src_object_id: i32,
        dst_object_id: i32,
        relation_type: Option<String>,
        note: Option<String>,
    ) -> Result<Self, String> {
        let relation = NewRelation {
            src_object_id,
            dst_object_id,
            relation_type: relation_type.unwrap_or_else(|| DEFAULT_RELATION_TYPE.to_string()),
            note: note.unwrap_or_default(),
        };
        relation.validate()?;
        Ok(relation)
    }

    /// Checks the invariants a relation must satisfy before it is stored.
    pub fn validate(&self) -> Result<(), String> {
        if self.src_object_id == self.dst_object_id {
            return Err("An object cannot relate to itself".to_string());
        }
        if self.relation_type.trim().is_empty() {
            return Err("Relation type cannot be empty".to_string());
        }
        Ok(())
    }
}
