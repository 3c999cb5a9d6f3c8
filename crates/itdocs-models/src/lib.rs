/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # IT Docs Models
//!
//! Row types, closed enumerations and read models for the IT documentation
//! catalog, together with the diesel schema they map onto.

pub mod models;
pub mod schema;
