//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

pub use schema::{AppConfig, CatalogSection, ListenSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CREAMERY_CONFIG";
/// Config file looked up in the working directory when `CREAMERY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "creamery.yaml";

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| AppError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config the binary should run with.
///
/// An explicit `CREAMERY_CONFIG` must point at a readable file. Without it,
/// `creamery.yaml` is used when present and built-in defaults otherwise.
pub fn load_from_env() -> Result<AppConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        Err(_) => {
            tracing::warn!(path = DEFAULT_CONFIG_PATH, "no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}
