use crate::error::{IdeError, Result};
use crate::types::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "replit3ds";

/// `<config dir>/replit3ds/config.json`
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join("config.json")
}

/// Load the config, writing the defaults back on first run.
pub fn load_or_init_config() -> Config {
    let path = config_path();
    if path.exists() {
        return load_config_from(&path);
    }
    let config = Config::default();
    if let Err(e) = save_config_to(&path, &config) {
        log::warn!("{}", e);
    }
    config
}

/// Load the config from `path`, returning defaults if it is missing or invalid.
pub fn load_config_from(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| IdeError::Config(format!("Failed to create config dir: {}", e)))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| IdeError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, json).map_err(|e| IdeError::Config(format!("Failed to write config: {}", e)))
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Directory that plays the part of the SD card.
pub fn storage_root(config: &Config) -> PathBuf {
    match &config.storage_root {
        Some(root) => PathBuf::from(root),
        None => data_dir().join("sdmc"),
    }
}

pub fn log_path(config: &Config) -> PathBuf {
    match &config.log_file {
        Some(file) => PathBuf::from(file),
        None => data_dir().join("replit3ds.log"),
    }
}

pub fn frame_interval(config: &Config) -> Duration {
    Duration::from_millis(config.frame_millis.max(1))
}
