/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # IT Docs Server
//!
//! Catalog of IT infrastructure documentation: companies own datacenters,
//! datacenters hold objects (services, servers, network devices), and every
//! object carries markdown pages, relations, documents and incidents.
//!
//! All storage access goes through [`dal::DAL`]; role checks live in [`authz`];
//! the HTTP surface is in [`api`].

pub mod api;
pub mod authz;
pub mod cli;
pub mod dal;
pub mod db;
pub mod utils;
