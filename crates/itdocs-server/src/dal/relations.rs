/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use itdocs_models::models::relations::{NewRelation, Relation};

/// Handles relation operations.
pub struct RelationsDAL<'a> {
    pub(crate) dal: &'a DAL,
}

impl<'a> RelationsDAL<'a> {
    /// Creates a directed relation between two existing objects.
    ///
    /// # Returns
    ///
    /// `DalError::Validation` for a self-referential relation and
    /// `DalError::Constraint` for an unknown endpoint or a duplicate edge.
    pub fn create(&self, new_relation: &NewRelation) -> Result<Relation, DalError> {
        use itdocs_models::schema::relations;

        new_relation.validate().map_err(DalError::Validation)?;

        let conn = &mut self.dal.conn()?;
        Ok(diesel::insert_into(relations::table)
            .values(new_relation)
            .returning(Relation::as_returning())
            .get_result(conn)?)
    }

    /// Relations whose source is `object_id`.
    pub fn list_outgoing(&self, object_id: i32) -> Result<Vec<Relation>, DalError> {
        use itdocs_models::schema::relations::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(relations
            .filter(src_object_id.eq(object_id))
            .order(id.asc())
            .select(Relation::as_select())
            .load(conn)?)
    }

    /// Relations whose target is `object_id`.
    pub fn list_incoming(&self, object_id: i32) -> Result<Vec<Relation>, DalError> {
        use itdocs_models::schema::relations::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(relations
            .filter(dst_object_id.eq(object_id))
            .order(id.asc())
            .select(Relation::as_select())
            .load(conn)?)
    }
}
