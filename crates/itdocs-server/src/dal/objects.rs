/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data access for catalog objects (services, servers and network devices).
//!
//! An object is always created with one page per section, and its detail view
//! gathers those pages together with its outgoing relations, documents and
//! incidents.

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::documents::Document;
use itdocs_models::models::incidents::Incident;
use itdocs_models::models::objects::{NewObject, Object, ObjectDetail};
use itdocs_models::models::pages::{NewPage, Page, PageSection};
use itdocs_models::models::relations::Relation;
use itdocs_utils::logging::prelude::*;

/// Handles object operations.
pub struct ObjectsDAL<'a> {
    /// Reference to the main DAL instance.
    pub(crate) dal: &'a DAL,
}

impl<'a> ObjectsDAL<'a> {
    /// Creates an object and its six section pages in one transaction.
    ///
    /// # Arguments
    ///
    /// * `new_object` - The object to insert
    /// * `pages` - Initial page content; sections not listed start empty
    ///
    /// # Returns
    ///
    /// The stored object, or `DalError::Constraint` if its datacenter does not exist.
    pub fn create_with_pages(
        &self,
        new_object: &NewObject,
        pages: &[NewPage],
    ) -> Result<Object, DalError> {
        use itdocs_models::schema::{objects, pages as pages_table};

        let conn = &mut self.dal.conn()?;
        let object = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let object: Object = diesel::insert_into(objects::table)
                .values(new_object)
                .returning(Object::as_returning())
                .get_result(conn)?;

            let rows: Vec<NewPage> = NewPage::for_object(object.id)
                .into_iter()
                .map(|blank| {
                    match pages.iter().find(|p| p.section == blank.section) {
                        Some(given) => blank.with_content(given.content_md.clone()),
                        None => blank,
                    }
                })
                .collect();

            diesel::insert_into(pages_table::table)
                .values(&rows)
                .execute(conn)?;

            Ok(object)
        })?;

        debug!("Created object {} ({}) with section pages", object.id, object.name);
        Ok(object)
    }

    /// Creates an object with six empty pages.
    pub fn create(&self, new_object: &NewObject) -> Result<Object, DalError> {
        self.create_with_pages(new_object, &[])
    }

    pub fn get(&self, object_id: i32) -> Result<Option<Object>, DalError> {
        use itdocs_models::schema::objects::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(objects
            .find(object_id)
            .select(Object::as_select())
            .first(conn)
            .optional()?)
    }

    /// Lists the objects of a datacenter by ascending id.
    pub fn list_for_datacenter(&self, datacenter_id: i32) -> Result<Vec<Object>, DalError> {
        use itdocs_models::schema::objects::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(objects
            .filter(dc_id.eq(datacenter_id))
            .order(id.asc())
            .select(Object::as_select())
            .load(conn)?)
    }

    /// Loads an object with everything attached to it.
    ///
    /// Only relations whose source is this object are included. Pages are
    /// ordered by section, everything else by ascending id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no object has this id.
    pub fn get_detail(&self, object_id: i32) -> Result<Option<ObjectDetail>, DalError> {
        use itdocs_models::schema::{documents, incidents, objects, relations};

        let conn = &mut self.dal.conn()?;
        conn.transaction::<_, DalError, _>(|conn| {
            let object: Object = match objects::table
                .find(object_id)
                .select(Object::as_select())
                .first(conn)
                .optional()?
            {
                Some(object) => object,
                None => return Ok(None),
            };

            let mut object_pages: Vec<Page> = Page::belonging_to(&object)
                .select(Page::as_select())
                .load(conn)?;
            object_pages.sort_by_key(|page| {
                PageSection::ALL.iter().position(|section| *section == page.section)
            });

            let outgoing: Vec<Relation> = relations::table
                .filter(relations::src_object_id.eq(object.id))
                .order(relations::id.asc())
                .select(Relation::as_select())
                .load(conn)?;

            let object_documents: Vec<Document> = Document::belonging_to(&object)
                .order(documents::id.asc())
                .select(Document::as_select())
                .load(conn)?;

            let object_incidents: Vec<Incident> = Incident::belonging_to(&object)
                .order(incidents::id.asc())
                .select(Incident::as_select())
                .load(conn)?;

            Ok(Some(ObjectDetail {
                object,
                pages: object_pages,
                relations: outgoing,
                documents: object_documents,
                incidents: object_incidents,
            }))
        })
    }
}
