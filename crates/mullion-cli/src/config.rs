//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from an explicit
//! path, the local project directory or the platform config directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use mullion::config::AppConfig;

use crate::error::CliError;

/// Project-local configuration path, relative to the working directory.
const LOCAL_CONFIG: &str = "mullion/config.toml";

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (`mullion/config.toml`)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:? = path; "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path:? = local_config; "Loading configuration from local path");
        return load_config_file(local_config);
    }

    match system_config_path() {
        Some(system_config) if system_config.exists() => {
            info!(path:? = system_config; "Loading configuration from system path");
            return load_config_file(&system_config);
        }
        Some(system_config) => {
            debug!(path:? = system_config; "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("rs", "mullion", "mullion")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from a TOML file
fn load_config_file(path: &Path) -> Result<AppConfig, CliError> {
    if !path.exists() {
        return Err(CliError::MissingConfig(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|err| CliError::io(path, err))?;

    toml::from_str(&content).map_err(|err| {
        CliError::config_parse(&path.display().to_string(), content.clone(), &err)
    })
}
