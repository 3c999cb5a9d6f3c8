/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Data models for the catalog.
//!
//! Closed enumerations (`ObjectType`, `PageSection`, `DocumentKind`, `Role`) are
//! stored as their lowercase string tag. Reading a tag that is not one of the
//! known variants fails with [`UnknownVariant`] instead of falling back to a
//! default.

use thiserror::Error;

/// A stored tag did not match any variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    /// Name of the enumeration being decoded
    pub kind: &'static str,
    /// The offending tag
    pub value: String,
}

/// Declares a closed enumeration persisted as a `Text` tag.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            diesel::AsExpression,
            diesel::FromSqlRow,
        )]
        #[diesel(sql_type = diesel::sql_types::Text)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The tag stored in the database and used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err($crate::models::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl diesel::serialize::ToSql<diesel::sql_types::Text, diesel::pg::Pg> for $name {
            fn to_sql<'b>(
                &'b self,
                out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
            ) -> diesel::serialize::Result {
                std::io::Write::write_all(out, self.as_str().as_bytes())?;
                Ok(diesel::serialize::IsNull::No)
            }
        }

        impl diesel::deserialize::FromSql<diesel::sql_types::Text, diesel::pg::Pg> for $name {
            fn from_sql(bytes: diesel::pg::PgValue<'_>) -> diesel::deserialize::Result<Self> {
                let tag = <String as diesel::deserialize::FromSql<
                    diesel::sql_types::Text,
                    diesel::pg::Pg,
                >>::from_sql(bytes)?;
                Ok(tag.parse::<$name>()?)
            }
        }
    };
}

pub mod companies;
pub mod datacenters;
pub mod documents;
pub mod incidents;
pub mod objects;
pub mod pages;
pub mod relations;
pub mod tree;
pub mod users;

pub use companies::{Company, NewCompany};
pub use datacenters::{Datacenter, NewDatacenter};
pub use documents::{Document, DocumentKind, NewDocument};
pub use incidents::{Incident, NewIncident};
pub use objects::{NewObject, Object, ObjectDetail, ObjectType};
pub use pages::{NewPage, Page, PageSection, PageUpdate};
pub use relations::{NewRelation, Relation};
pub use tree::{TreeCompany, TreeDatacenter, TreeNode, TreeResponse};
pub use users::{NewUser, Role, User, UserOut};
