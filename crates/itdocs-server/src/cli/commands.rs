/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use crate::api::{self, AppState};
use crate::dal::DAL;
use crate::db::create_shared_connection_pool;
use crate::utils;
use crate::utils::password::hash_password;
use itdocs_models::models::users::{NewUser, Role};
use itdocs_utils::config::Settings;
use itdocs_utils::logging::prelude::*;
use std::error::Error;
use tokio::signal;

fn open_dal(config: &Settings, max_size: u32) -> Result<DAL, Box<dyn Error>> {
    let pool = create_shared_connection_pool(&config.database.url, max_size)?;
    pool.run_migrations().map_err(|e| e as Box<dyn Error>)?;
    Ok(DAL::new(pool))
}

/// Function to start the itdocs server
///
/// Runs pending migrations, configures the API routes and serves until ctrl-c.
pub async fn serve(config: &Settings) -> Result<(), Box<dyn Error>> {
    info!("Starting itdocs server");

    info!("Creating database connection pool");
    let dal = open_dal(config, config.database.pool_size)?;
    info!("Database ready");

    tokio::fs::create_dir_all(&config.storage.upload_dir).await?;

    info!("Configuring API routes");
    let state = AppState::new(dal, config.clone());
    let app = api::configure_api_routes(state.clone()).with_state(state);

    let addr = &config.server.bind_address;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for ctrl+c: {}", e);
        }
        shutdown_tx.send(()).ok();
    });

    info!("itdocs is now running");
    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown(shutdown_rx))
        .await?;

    Ok(())
}

/// Loads the demo data.
pub fn seed(config: &Settings) -> Result<(), Box<dyn Error>> {
    info!("Seeding demo data");
    let dal = open_dal(config, 1)?;
    let summary = utils::seed::seed_demo_data(&dal).map_err(|e| e as Box<dyn Error>)?;
    println!(
        "Seeded {} users, {} companies, {} objects",
        summary.users, summary.companies, summary.objects
    );
    Ok(())
}

pub fn create_user(
    config: &Settings,
    username: String,
    password: String,
    role: Role,
    full_name: String,
) -> Result<(), Box<dyn Error>> {
    info!("Creating user {}", username);
    let dal = open_dal(config, 1)?;

    let password_hash = hash_password(&password).map_err(|e| e.to_string())?;
    let new_user = NewUser::new(username, password_hash, role, full_name)?;
    let user = dal.users().upsert(&new_user)?;

    println!("User {} (id {}) has role {}", user.username, user.id, user.role);
    Ok(())
}

pub fn delete_company(config: &Settings, id: i32) -> Result<(), Box<dyn Error>> {
    let dal = open_dal(config, 1)?;

    match dal.companies().delete(id)? {
        0 => Err(format!("Company {} not found", id).into()),
        _ => {
            println!("Deleted company {}", id);
            Ok(())
        }
    }
}
