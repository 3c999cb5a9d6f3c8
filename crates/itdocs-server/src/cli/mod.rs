/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

pub mod commands;

use clap::{Parser, Subcommand};
use itdocs_models::models::users::Role;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// IT Docs catalog server
///
/// Serves the documentation catalog and provides maintenance commands for
/// seeding demo data and managing users and companies.
pub struct Cli {
    /// Path to a configuration file layered over the built-in defaults
    #[arg(long, global = true, env = "ITDOCS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run migrations and start the HTTP server
    Serve,

    /// Load the demo users and, on an empty catalog, the demo companies
    Seed,

    /// Create a user, or reset the password and role of an existing one
    CreateUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// One of admin, editor, viewer
        #[arg(long, default_value = "viewer")]
        role: Role,
        #[arg(long, default_value = "")]
        full_name: String,
    },

    /// Delete a company and everything beneath it
    DeleteCompany {
        #[arg(long)]
        id: i32,
    },
}
