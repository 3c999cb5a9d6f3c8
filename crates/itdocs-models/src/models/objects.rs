/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Objects Module
//!
//! Infrastructure objects (services, servers and network devices) owned by a
//! datacenter. An object's `type` is chosen at creation and never changes; the
//! catalog tree groups objects strictly by it.
//!
//! - `id`: i32 - Unique identifier
//! - `dc_id`: i32 - Owning datacenter
//! - `object_type`: ObjectType - `type` column, one of service/server/network
//! - `name`: String - Display name
//! - `status`: String - Free-text status, "ok" unless stated otherwise
//! - `ip`, `fqdn`, `tags`, `description`: optional descriptive fields

use crate::models::datacenters::Datacenter;
use crate::models::documents::Document;
use crate::models::incidents::Incident;
use crate::models::pages::Page;
use crate::models::relations::Relation;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Status given to objects created without one.
pub const DEFAULT_STATUS: &str = "ok";

text_enum! {
    /// Kind of infrastructure object.
    pub enum ObjectType {
        Service => "service",
        Server => "server",
        Network => "network",
    }
}

/// Represents an infrastructure object.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::objects)]
#[diesel(belongs_to(Datacenter, foreign_key = dc_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Object {
    pub id: i32,
    pub dc_id: i32,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub name: String,
    pub status: String,
    pub ip: Option<String>,
    pub fqdn: Option<String>,
    pub tags: Option<String>,
    pub description: Option<String>,
}

/// Represents a new object to be inserted into the database.
#[derive(Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::objects)]
pub struct NewObject {
    pub dc_id: i32,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub name: String,
    pub status: String,
    pub ip: Option<String>,
    pub fqdn: Option<String>,
    pub tags: Option<String>,
    pub description: Option<String>,
}

impl NewObject {
    /// Creates a new `NewObject` with status "ok" and no optional fields.
    ///
    /// # Returns
    ///
    /// An error message if the name is blank.
    pub fn new(dc_id: i32, object_type: ObjectType, name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Object name cannot be empty".to_string());
        }

        Ok(NewObject {
            dc_id,
            object_type,
            name,
            status: DEFAULT_STATUS.to_string(),
            ip: None,
            fqdn: None,
            tags: None,
            description: None,
        })
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_fqdn(mut self, fqdn: impl Into<String>) -> Self {
        self.fqdn = Some(fqdn.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An object together with everything attached to it.
///
/// `relations` holds only the edges leaving this object (`src_object_id ==
/// object.id`); inbound edges are not part of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetail {
    pub object: Object,
    pub pages: Vec<Page>,
    pub relations: Vec<Relation>,
    pub documents: Vec<Document>,
    pub incidents: Vec<Incident>,
}
