/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data access for documents attached to objects.

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::documents::{Document, NewDocument};
use itdocs_utils::logging::prelude::*;

/// Handles document operations.
pub struct DocumentsDAL<'a> {
    /// Reference to the main DAL instance.
    pub(crate) dal: &'a DAL,
}

impl<'a> DocumentsDAL<'a> {
    /// Stores a document.
    ///
    /// # Arguments
    ///
    /// * `new_document` - Document metadata. For files, the upload must already
    ///   have been written to `file_path`.
    ///
    /// # Returns
    ///
    /// The stored document with its assigned id and `uploaded_at`.
    /// `DalError::Validation` if the kind lacks its path or URL,
    /// `DalError::Constraint` if the object does not exist.
    pub fn create(&self, new_document: &NewDocument) -> Result<Document, DalError> {
        use itdocs_models::schema::documents;

        new_document.validate().map_err(DalError::Validation)?;

        let conn = &mut self.dal.conn()?;
        let document = diesel::insert_into(documents::table)
            .values(new_document)
            .returning(Document::as_returning())
            .get_result(conn)?;

        debug!("Stored {} document {}", new_document.kind, new_document.title);
        Ok(document)
    }

    /// Lists an object's documents by ascending id.
    ///
    /// An unknown object simply has no documents.
    pub fn list_for_object(&self, owner_id: i32) -> Result<Vec<Document>, DalError> {
        use itdocs_models::schema::documents::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(documents
            .filter(object_id.eq(owner_id))
            .order(id.asc())
            .select(Document::as_select())
            .load(conn)?)
    }
}
