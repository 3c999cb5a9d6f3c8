/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::datacenters::{Datacenter, NewDatacenter};

/// Handles datacenter operations.
pub struct DatacentersDAL<'a> {
    pub(crate) dal: &'a DAL,
}

impl<'a> DatacentersDAL<'a> {
    /// Creates a datacenter under an existing company.
    ///
    /// # Returns
    ///
    /// `DalError::Constraint` if the company does not exist.
    pub fn create(&self, new_datacenter: &NewDatacenter) -> Result<Datacenter, DalError> {
        use itdocs_models::schema::datacenters;

        let conn = &mut self.dal.conn()?;
        Ok(diesel::insert_into(datacenters::table)
            .values(new_datacenter)
            .returning(Datacenter::as_returning())
            .get_result(conn)?)
    }

    /// Lists the datacenters of a company by ascending id.
    pub fn list_for_company(&self, owner_id: i32) -> Result<Vec<Datacenter>, DalError> {
        use itdocs_models::schema::datacenters::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(datacenters
            .filter(company_id.eq(owner_id))
            .order(id.asc())
            .select(Datacenter::as_select())
            .load(conn)?)
    }
}
