/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Documents Module
//!
//! Documents attached to an object are either uploaded files (`kind = file`,
//! `file_path` set to where the upload was written) or external links
//! (`kind = link`, `url` set). The pairing is checked by
//! [`NewDocument::validate`] before anything is stored.

use crate::models::objects::Object;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

text_enum! {
    /// How a document's content is reached.
    pub enum DocumentKind {
        File => "file",
        Link => "link",
    }
}

/// Represents a document attached to an object.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::documents)]
#[diesel(belongs_to(Object, foreign_key = object_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Document {
    pub id: i32,
    pub object_id: i32,
    pub title: String,
    pub file_path: Option<String>,
    pub url: Option<String>,
    pub kind: DocumentKind,
    pub uploaded_at: DateTime<Utc>,
}

/// Represents a new document to be inserted into the database.
#[derive(Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocument {
    pub object_id: i32,
    pub title: String,
    pub file_path: Option<String>,
    pub url: Option<String>,
    pub kind: DocumentKind,
}

impl NewDocument {
    /// Creates a new `NewDocument`. Values are stored exactly as given.
    ///
    /// # Arguments
    ///
    /// * `object_id` - Object the document is attached to (not checked here)
    /// * `title` - Display title
    /// * `kind` - File or link
    /// * `file_path` - Server-local path of an uploaded file, required for `File`
    /// * `url` - Target of a link, required for `Link`
    ///
    /// # Returns
    ///
    /// An error message if the title is blank or the kind lacks its field.
    pub fn new(
        object_id: i32,
        title: String,
        kind: DocumentKind,
        file_path: Option<String>,
        url: Option<String>,
    ) -> Result<Self, String> {
        let document = NewDocument {
            object_id,
            title,
            file_path,
            url,
            kind,
        };
        document.validate()?;
        Ok(document)
    }

    /// Checks that the document's kind is backed by the matching field.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Document title cannot be empty".to_string());
        }

        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        match self.kind {
            DocumentKind::File if !present(&self.file_path) => {
                Err("File documents require a file path".to_string())
            }
            DocumentKind::Link if !present(&self.url) => {
                Err("Link documents require a URL".to_string())
            }
            _ => Ok(()),
        }
    }
}
