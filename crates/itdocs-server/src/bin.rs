/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! itdocs CLI application
//!
//! Entry point for serving the catalog and for its maintenance commands.

use clap::Parser;
use itdocs_server::cli::{commands, Cli, Commands};
use itdocs_server::utils;
use itdocs_utils::config::Settings;
use itdocs_utils::logging::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Settings::new(cli.config.clone())?;

    utils::init_logging(&config)?;

    utils::pak::create_pak_controller(Some(&config)).map_err(|e| e as Box<dyn std::error::Error>)?;

    match cli.command {
        Commands::Serve => commands::serve(&config).await?,
        Commands::Seed => commands::seed(&config)?,
        Commands::CreateUser {
            username,
            password,
            role,
            full_name,
        } => commands::create_user(&config, username, password, role, full_name)?,
        Commands::DeleteCompany { id } => commands::delete_company(&config, id)?,
    }

    info!("Done");
    Ok(())
}
