/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Pages Module
//!
//! Wiki-style markdown pages attached to an object, one per section. Pages are
//! created together with their object (see [`NewPage::for_object`]) and
//! afterwards only their content changes.

use crate::models::objects::Object;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

text_enum! {
    /// Section of an object's documentation a page belongs to.
    pub enum PageSection {
        Overview => "overview",
        Links => "links",
        Arch => "arch",
        Net => "net",
        Inc => "inc",
        Docs => "docs",
    }
}

/// Represents a documentation page.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::pages)]
#[diesel(belongs_to(Object, foreign_key = object_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Page {
    pub id: i32,
    pub object_id: i32,
    pub section: PageSection,
    pub content_md: String,
    /// When the content was last written
    pub updated_at: DateTime<Utc>,
    /// User who last wrote the content; cleared if that user is deleted
    pub updated_by: Option<i32>,
}

/// Represents a new page to be inserted into the database.
#[derive(Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::pages)]
pub struct NewPage {
    pub object_id: i32,
    pub section: PageSection,
    pub content_md: String,
}

impl NewPage {
    /// One page per section for the given object, in section order.
    pub fn for_object(object_id: i32) -> Vec<NewPage> {
        PageSection::ALL
            .iter()
            .map(|section| NewPage {
                object_id,
                section: *section,
                content_md: String::new(),
            })
            .collect()
    }

    /// Replaces the initial content.
    pub fn with_content(mut self, content_md: impl Into<String>) -> Self {
        self.content_md = content_md.into();
        self
    }
}

/// Request body for replacing a page's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageUpdate {
    pub content_md: String,
}
