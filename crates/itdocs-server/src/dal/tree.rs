/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Loads the catalog tree.
//!
//! Three queries (companies, their datacenters, their objects) are grouped in
//! memory with `belonging_to`/`grouped_by` and handed to the pure
//! [`TreeResponse::build`] projection. There is no paging: the whole catalog is
//! returned on every call.

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::companies::Company;
use itdocs_models::models::datacenters::Datacenter;
use itdocs_models::models::objects::Object;
use itdocs_models::models::tree::TreeResponse;

/// Builds the Company -> Datacenter -> Object tree.
pub struct TreeDAL<'a> {
    /// Reference to the main DAL instance.
    pub(crate) dal: &'a DAL,
}

impl<'a> TreeDAL<'a> {
    /// Returns the whole catalog as a tree, every level in ascending id order.
    ///
    /// The three reads share one transaction so the tree is a consistent snapshot.
    pub fn get(&self) -> Result<TreeResponse, DalError> {
        use itdocs_models::schema::{companies, datacenters, objects};

        let conn = &mut self.dal.conn()?;
        conn.transaction::<_, DalError, _>(|conn| {
            let all_companies: Vec<Company> = companies::table
                .order(companies::id.asc())
                .select(Company::as_select())
                .load(conn)?;

            let all_datacenters: Vec<Datacenter> = Datacenter::belonging_to(&all_companies)
                .order(datacenters::id.asc())
                .select(Datacenter::as_select())
                .load(conn)?;

            let all_objects: Vec<Object> = Object::belonging_to(&all_datacenters)
                .order(objects::id.asc())
                .select(Object::as_select())
                .load(conn)?;

            let objects_per_dc = all_objects.grouped_by(&all_datacenters);
            let dcs_with_objects: Vec<(Datacenter, Vec<Object>)> =
                all_datacenters.into_iter().zip(objects_per_dc).collect();

            let dcs_per_company = dcs_with_objects.grouped_by(&all_companies);
            let catalog: Vec<(Company, Vec<(Datacenter, Vec<Object>)>)> =
                all_companies.into_iter().zip(dcs_per_company).collect();

            Ok(TreeResponse::build(&catalog))
        })
    }
}
