/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::incidents::{Incident, NewIncident};

/// Handles incident operations.
pub struct IncidentsDAL<'a> {
    pub(crate) dal: &'a DAL,
}

impl<'a> IncidentsDAL<'a> {
    pub fn create(&self, new_incident: &NewIncident) -> Result<Incident, DalError> {
        use itdocs_models::schema::incidents;

        let conn = &mut self.dal.conn()?;
        Ok(diesel::insert_into(incidents::table)
            .values(new_incident)
            .returning(Incident::as_returning())
            .get_result(conn)?)
    }

    /// Lists an object's incidents by ascending id.
    pub fn list_for_object(&self, owner_id: i32) -> Result<Vec<Incident>, DalError> {
        use itdocs_models::schema::incidents::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(incidents
            .filter(object_id.eq(owner_id))
            .order(id.asc())
            .select(Incident::as_select())
            .load(conn)?)
    }
}
