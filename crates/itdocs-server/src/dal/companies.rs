/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data access for companies, the roots of the catalog tree.

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::companies::{Company, NewCompany};
use itdocs_utils::logging::prelude::*;

/// Handles company operations.
pub struct CompaniesDAL<'a> {
    /// Reference to the main DAL instance.
    pub(crate) dal: &'a DAL,
}

impl<'a> CompaniesDAL<'a> {
    /// Creates a new company.
    ///
    /// # Arguments
    ///
    /// * `new_company` - Company to insert. Names are unique.
    ///
    /// # Returns
    ///
    /// The stored company, or `DalError::Constraint` if the name is taken.
    pub fn create(&self, new_company: &NewCompany) -> Result<Company, DalError> {
        use itdocs_models::schema::companies;

        let conn = &mut self.dal.conn()?;
        let company = diesel::insert_into(companies::table)
            .values(new_company)
            .returning(Company::as_returning())
            .get_result(conn)?;
        Ok(company)
    }

    /// Lists every company in storage order (ascending id).
    pub fn list(&self) -> Result<Vec<Company>, DalError> {
        use itdocs_models::schema::companies::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(companies
            .order(id.asc())
            .select(Company::as_select())
            .load(conn)?)
    }

    pub fn get(&self, company_id: i32) -> Result<Option<Company>, DalError> {
        use itdocs_models::schema::companies::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(companies
            .find(company_id)
            .select(Company::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn get_by_name(&self, company_name: &str) -> Result<Option<Company>, DalError> {
        use itdocs_models::schema::companies::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(companies
            .filter(name.eq(company_name))
            .select(Company::as_select())
            .first(conn)
            .optional()?)
    }

    /// Deletes a company together with everything beneath it.
    ///
    /// Datacenters, objects and their pages, relations, documents and incidents
    /// go with it in the same transaction.
    ///
    /// # Returns
    ///
    /// The number of companies removed (0 if the id was unknown).
    pub fn delete(&self, company_id: i32) -> Result<usize, DalError> {
        use itdocs_models::schema::companies::dsl::*;

        let conn = &mut self.dal.conn()?;
        let removed = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(companies.filter(id.eq(company_id))).execute(conn)
        })?;

        if removed > 0 {
            info!("Deleted company {} and its subtree", company_id);
        }
        Ok(removed)
    }
}
