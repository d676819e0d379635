//! Configuration and roof file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from the usual
//! locations (explicit path, local directory, system directory) and reads
//! roof files given with `--input`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use ridgeline::{RidgelineError, config::AppConfig, roof::RoofInput};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for RidgelineError {
    fn from(err: ConfigError) -> Self {
        RidgelineError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (ridgeline/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RidgelineError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("ridgeline/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "ridgeline", "ridgeline") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, RidgelineError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

/// Load a roof description from a TOML file.
///
/// Every key is optional; missing keys keep their default values.
///
/// # Errors
///
/// Returns [`RidgelineError::Io`] if the file cannot be read or is not a
/// valid roof file.
pub fn load_roof(path: impl AsRef<Path>) -> Result<RoofInput, RidgelineError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading roof file");

    let content = fs::read_to_string(path)?;
    let input: RoofInput = toml::from_str(&content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid roof file {}: {e}", path.display()),
        )
    })?;

    debug!(input:?; "Roof file loaded");
    Ok(input)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use ridgeline::report::Language;

    use super::*;

    #[test]
    fn test_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[labels]\nlanguage = \"nl\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.labels().language(), Language::Dutch);
        assert_eq!(config.canvas().width(), 800.0);
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();

        assert!(matches!(err, RidgelineError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = 1").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }

    #[test]
    fn test_load_roof_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roof.toml");
        fs::write(&path, "width = 7200\nleft_angle = 45\n").unwrap();

        let input = load_roof(&path).unwrap();
        assert_eq!(input.width(), 7200.0);
        assert_eq!(input.left_angle(), 45.0);
        assert_eq!(input.length(), 10000.0);
    }

    #[test]
    fn test_load_roof_rejects_wrong_types() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roof.toml");
        fs::write(&path, "width = \"wide\"\n").unwrap();

        let err = load_roof(&path).unwrap_err();
        assert!(matches!(err, RidgelineError::Io(_)));
        assert!(err.to_string().contains("invalid roof file"));
    }
}
