/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data access for user accounts and their issued bearer keys.

use crate::dal::{DalError, DAL};
use chrono::Utc;
use diesel::prelude::*;
use itdocs_models::models::users::{NewUser, User};
use itdocs_utils::logging::prelude::*;

/// Handles user operations.
pub struct UsersDAL<'a> {
    /// Reference to the main DAL instance.
    pub(crate) dal: &'a DAL,
}

impl<'a> UsersDAL<'a> {
    /// Creates a new user. Usernames are unique.
    pub fn create(&self, new_user: &NewUser) -> Result<User, DalError> {
        use itdocs_models::schema::users;

        let conn = &mut self.dal.conn()?;
        Ok(diesel::insert_into(users::table)
            .values(new_user)
            .returning(User::as_returning())
            .get_result(conn)?)
    }

    /// Creates the user, or refreshes password, role and full name if the
    /// username already exists.
    pub fn upsert(&self, new_user: &NewUser) -> Result<User, DalError> {
        use itdocs_models::schema::users::dsl::*;

        let conn = &mut self.dal.conn()?;
        let user = diesel::insert_into(users)
            .values(new_user)
            .on_conflict(username)
            .do_update()
            .set(new_user)
            .returning(User::as_returning())
            .get_result(conn)?;

        info!("Upserted user {} with role {}", new_user.username, new_user.role);
        Ok(user)
    }

    pub fn get(&self, user_id: i32) -> Result<Option<User>, DalError> {
        use itdocs_models::schema::users::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(users
            .find(user_id)
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn get_by_username(&self, name: &str) -> Result<Option<User>, DalError> {
        use itdocs_models::schema::users::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(users
            .filter(username.eq(name))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    /// Users currently holding an issued bearer key.
    pub fn list_with_tokens(&self) -> Result<Vec<User>, DalError> {
        use itdocs_models::schema::users::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(users
            .filter(pak_hash.is_not_null())
            .order(id.asc())
            .select(User::as_select())
            .load(conn)?)
    }

    /// Records a newly issued bearer key, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user the key was issued to
    /// * `new_pak_hash` - Hash of the key; the key itself is never stored
    ///
    /// # Returns
    ///
    /// The updated user, or `Ok(None)` if the user does not exist.
    pub fn update_pak_hash(
        &self,
        user_id: i32,
        new_pak_hash: String,
    ) -> Result<Option<User>, DalError> {
        use itdocs_models::schema::users::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(diesel::update(users.find(user_id))
            .set((
                pak_hash.eq(Some(new_pak_hash)),
                pak_issued_at.eq(Some(Utc::now())),
            ))
            .returning(User::as_returning())
            .get_result(conn)
            .optional()?)
    }

    /// Deletes a user. Pages they edited keep their content with `updated_by` cleared.
    pub fn delete(&self, user_id: i32) -> Result<usize, DalError> {
        use itdocs_models::schema::users::dsl::*;

        let conn = &mut self.dal.conn()?;
        Ok(diesel::delete(users.find(user_id)).execute(conn)?)
    }
}
