/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data access for documentation pages.
//!
//! Pages are never created or removed on their own (see
//! [`crate::dal::ObjectsDAL::create_with_pages`]); this module reads them and
//! replaces their content.

use crate::dal::{DalError, DAL};
use chrono::Utc;
use diesel::prelude::*;
use itdocs_models::models::pages::{Page, PageSection};
use itdocs_utils::logging::prelude::*;

/// Handles page operations.
pub struct PagesDAL<'a> {
    /// Reference to the main DAL instance.
    pub(crate) dal: &'a DAL,
}

impl<'a> PagesDAL<'a> {
    pub fn get(&self, page_id: i32) -> Result<Option<Page>, DalError> {
        use itdocs_models::schema::pages::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(pages
            .find(page_id)
            .select(Page::as_select())
            .first(conn)
            .optional()?)
    }

    /// Lists an object's pages by ascending id, which is section order.
    pub fn list_for_object(&self, owner_id: i32) -> Result<Vec<Page>, DalError> {
        use itdocs_models::schema::pages::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(pages
            .filter(object_id.eq(owner_id))
            .order(id.asc())
            .select(Page::as_select())
            .load(conn)?)
    }

    pub fn get_by_section(
        &self,
        owner_id: i32,
        page_section: PageSection,
    ) -> Result<Option<Page>, DalError> {
        use itdocs_models::schema::pages::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(pages
            .filter(object_id.eq(owner_id))
            .filter(section.eq(page_section))
            .select(Page::as_select())
            .first(conn)
            .optional()?)
    }

    /// Replaces a page's markdown content.
    ///
    /// # Arguments
    ///
    /// * `page_id` - The page to update
    /// * `content` - New content, stored verbatim (empty is allowed)
    /// * `user_id` - The editing user, recorded as `updated_by`
    ///
    /// # Returns
    ///
    /// The updated page with a fresh `updated_at`, or `Ok(None)` if the page
    /// does not exist. In that case nothing is written.
    pub fn update_content(
        &self,
        page_id: i32,
        content: &str,
        user_id: i32,
    ) -> Result<Option<Page>, DalError> {
        use itdocs_models::schema::pages::dsl::*;

        let conn = &mut self.dal.conn()?;
        let page = diesel::update(pages.find(page_id))
            .set((
                content_md.eq(content),
                updated_at.eq(Utc::now()),
                updated_by.eq(Some(user_id)),
            ))
            .returning(Page::as_returning())
            .get_result(conn)
            .optional()?;

        if let Some(page) = &page {
            info!(
                "Page {} ({} of object {}) updated by user {}",
                page.id, page.section, page.object_id, user_id
            );
        }
        Ok(page)
    }
}
