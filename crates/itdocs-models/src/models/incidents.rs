/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Incidents Module
//!
//! Incident records kept against an object: what was seen, why, what to check
//! and how it was resolved.

use crate::models::objects::Object;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Severity used when none is given.
pub const DEFAULT_SEVERITY: &str = "info";

/// Represents an incident recorded against an object.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::incidents)]
#[diesel(belongs_to(Object, foreign_key = object_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Incident {
    pub id: i32,
    pub object_id: i32,
    pub title: String,
    pub severity: String,
    pub symptom: String,
    pub cause: String,
    pub check: String,
    pub resolution: String,
    pub created_at: DateTime<Utc>,
}

/// Represents a new incident to be inserted into the database.
#[derive(Insertable, Debug, Clone, Default, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::incidents)]
pub struct NewIncident {
    pub object_id: i32,
    pub title: String,
    pub severity: String,
    pub symptom: String,
    pub cause: String,
    pub check: String,
    pub resolution: String,
}

impl NewIncident {
    /// Creates a new `NewIncident` with severity "info" and empty narrative fields.
    pub fn new(object_id: i32, title: String) -> Result<Self, String> {
        if title.trim().is_empty() {
            return Err("Incident title cannot be empty".to_string());
        }

        Ok(NewIncident {
            object_id,
            title,
            severity: DEFAULT_SEVERITY.to_string(),
            ..Default::default()
        })
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    /// Sets the symptom, cause, check and resolution narrative in one go.
    pub fn with_details(
        mut self,
        symptom: impl Into<String>,
        cause: impl Into<String>,
        check: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        self.symptom = symptom.into();
        self.cause = cause.into();
        self.check = check.into();
        self.resolution = resolution.into();
        self
    }
}
