/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Utility functions for the itdocs server: bearer keys, password hashing,
//! demo data, logging setup and shutdown handling.

use itdocs_utils::config::Settings;
use itdocs_utils::logging::prelude::*;
use std::error::Error;
use tokio::sync::oneshot;

pub mod pak;
pub mod password;
pub mod seed;

/// Resolves once the shutdown signal fires (or its sender is dropped).
pub async fn shutdown(shutdown_rx: oneshot::Receiver<()>) {
    let _ = shutdown_rx.await;
    info!("Shutdown signal received, draining connections");
}

/// Installs the process logger with the configured level and format.
pub fn init_logging(config: &Settings) -> Result<(), Box<dyn Error>> {
    itdocs_utils::logging::init_with_format(&config.log.level, &config.log.format)
        .map_err(|e| format!("failed to install logger: {}", e))?;
    Ok(())
}
