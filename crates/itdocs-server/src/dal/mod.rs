/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data Access Layer.
//!
//! The only sanctioned path to the catalog tables. Each table gets a small
//! accessor borrowing the shared [`DAL`] (`dal.objects()`, `dal.pages()`, ...).
//!
//! Lookups by id return `Ok(None)` when the row does not exist. Every mutating
//! operation is a single statement or runs inside one transaction, so a failure
//! never leaves a partial write behind. Role checks are not made here; callers
//! consult [`crate::authz`] first.

use crate::db::{ConnectionPool, DbConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

mod companies;
mod datacenters;
mod documents;
mod incidents;
mod objects;
mod pages;
mod relations;
mod tree;
mod users;

pub use companies::CompaniesDAL;
pub use datacenters::DatacentersDAL;
pub use documents::DocumentsDAL;
pub use incidents::IncidentsDAL;
pub use objects::ObjectsDAL;
pub use pages::PagesDAL;
pub use relations::RelationsDAL;
pub use tree::TreeDAL;
pub use users::UsersDAL;

/// Errors surfaced by the data access layer.
#[derive(Debug, Error)]
pub enum DalError {
    /// No connection could be taken from the pool.
    #[error("failed to get database connection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A foreign key, unique, check or not-null constraint rejected the write.
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// A stored value could not be decoded (e.g. an unknown enumeration tag).
    #[error("inconsistent stored data: {0}")]
    DataConsistency(String),
    /// Input was rejected before reaching storage.
    #[error("invalid input: {0}")]
    Validation(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Query(DieselError),
}

impl From<DieselError> for DalError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::NotNullViolation => {
                    DalError::Constraint(info.message().to_string())
                }
                _ => DalError::Query(DieselError::DatabaseError(kind, info)),
            },
            DieselError::DeserializationError(e) => DalError::DataConsistency(error_chain(&*e)),
            other => DalError::Query(other),
        }
    }
}

/// Joins an error with its sources, outermost first.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Represents the Data Access Layer for the catalog.
#[derive(Clone)]
pub struct DAL {
    /// Shared connection pool.
    pub pool: ConnectionPool,
}

impl DAL {
    pub fn new(pool: ConnectionPool) -> Self {
        DAL { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, DalError> {
        Ok(self.pool.get()?)
    }

    pub fn companies(&self) -> CompaniesDAL {
        CompaniesDAL { dal: self }
    }

    pub fn datacenters(&self) -> DatacentersDAL {
        DatacentersDAL { dal: self }
    }

    pub fn objects(&self) -> ObjectsDAL {
        ObjectsDAL { dal: self }
    }

    pub fn pages(&self) -> PagesDAL {
        PagesDAL { dal: self }
    }

    pub fn relations(&self) -> RelationsDAL {
        RelationsDAL { dal: self }
    }

    pub fn documents(&self) -> DocumentsDAL {
        DocumentsDAL { dal: self }
    }

    pub fn incidents(&self) -> IncidentsDAL {
        IncidentsDAL { dal: self }
    }

    pub fn users(&self) -> UsersDAL {
        UsersDAL { dal: self }
    }

    pub fn tree(&self) -> TreeDAL {
        TreeDAL { dal: self }
    }
}
