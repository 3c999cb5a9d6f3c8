/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Prefixed API keys (PAKs) used as bearer tokens.
//!
//! A key is handed to the user once at login; only its SHA-256 hash is kept.
//! The controller is built from the first `Settings` it sees and shared by the
//! whole process afterwards.

use itdocs_utils::logging::prelude::*;
use itdocs_utils::Settings;
use once_cell::sync::OnceCell;
use prefixed_api_key::{PrefixedApiKey, PrefixedApiKeyController};
use rand::rngs::OsRng;
use sha2::Sha256;
use std::error::Error;
use std::sync::Arc;

type Controller = PrefixedApiKeyController<OsRng, Sha256>;

static PAK_CONTROLLER: OnceCell<Arc<Controller>> = OnceCell::new();

/// Returns the process-wide controller, building it from `config` on first use.
///
/// # Returns
///
/// An error if the controller has not been built yet and no settings were
/// given, or if the configured key shape is rejected.
pub fn create_pak_controller(
    config: Option<&Settings>,
) -> Result<Arc<Controller>, Box<dyn Error + Send + Sync>> {
    match (PAK_CONTROLLER.get(), config) {
        (Some(controller), _) => Ok(controller.clone()),
        (None, Some(cfg)) => {
            let controller = PAK_CONTROLLER.get_or_try_init(|| {
                info!("Initializing PAK controller with prefix {}", cfg.pak.prefix);
                build_controller(cfg).map(Arc::new)
            })?;
            Ok(controller.clone())
        }
        (None, None) => Err("PAK controller not initialized and no config provided".into()),
    }
}

fn build_controller(config: &Settings) -> Result<Controller, Box<dyn Error + Send + Sync>> {
    PrefixedApiKeyController::configure()
        .prefix(config.pak.prefix.clone())
        .short_token_length(config.pak.short_token_length)
        .short_token_prefix(config.pak.short_token_prefix.clone())
        .long_token_length(config.pak.long_token_length)
        .rng_osrng()
        .digest_sha256()
        .finalize()
        .map_err(|e| format!("invalid PAK configuration: {:?}", e).into())
}

/// Generates a new key.
///
/// # Returns
///
/// The key to hand to the client and the hash to store.
pub fn create_pak(config: &Settings) -> Result<(String, String), Box<dyn Error + Send + Sync>> {
    let controller = create_pak_controller(Some(config))?;
    controller
        .try_generate_key_and_hash()
        .map(|(pak, hash)| (pak.to_string(), hash))
        .map_err(|e| format!("failed to generate PAK: {:?}", e).into())
}

/// Checks a presented key against a stored hash.
///
/// Strings that are not well-formed keys never verify.
pub fn verify_pak(config: &Settings, pak: &str, stored_hash: &str) -> bool {
    let controller = match create_pak_controller(Some(config)) {
        Ok(controller) => controller,
        Err(e) => {
            error!("PAK controller unavailable: {}", e);
            return false;
        }
    };

    match PrefixedApiKey::from_string(pak) {
        Ok(parsed) => controller.long_token_hashed(&parsed) == stored_hash,
        Err(_) => false,
    }
}
