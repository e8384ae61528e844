use crate::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
use crate::errors::{SolaceError, SolaceResult};
use crate::theme::Theme;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend_url: String,
    pub theme: Theme,
    pub log_spec: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            theme: Theme::default(),
            log_spec: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file (creating it with defaults on first run), applies
/// environment overrides and publishes the result to the global handle.
pub fn initialize_config() -> SolaceResult<()> {
    let path = config_path()?;
    let mut config = load_or_create(&path)?;
    apply_env_overrides(&mut config);
    validate_config(&config)?;

    *CONFIG.write().unwrap() = config;
    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

/// Validates, persists and publishes an updated config. Used by the theme
/// toggle so the preference survives a restart.
pub fn update_config(updated: Config) -> SolaceResult<()> {
    validate_config(&updated)?;

    let path = config_path()?;
    write_config(&path, &updated)?;

    *CONFIG.write().unwrap() = updated;
    Ok(())
}

fn config_path() -> SolaceResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SolaceError::config_error("could not determine home directory"))?;
    Ok(home.join(".config").join("solace").join("config.json"))
}

fn load_or_create(path: &Path) -> SolaceResult<Config> {
    if path.exists() {
        return read_config(path);
    }

    let config = Config::default();
    write_config(path, &config)?;
    Ok(config)
}

fn read_config(path: &Path) -> SolaceResult<Config> {
    let raw = fs::read_to_string(path)
        .map_err(|e| SolaceError::config_error(format!("failed to read config file: {}", e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| SolaceError::config_error(format!("failed to parse config: {}", e)))
}

fn write_config(path: &Path, config: &Config) -> SolaceResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SolaceError::config_error(format!("failed to create config directory: {}", e))
        })?;
    }

    let raw = serde_json::to_string_pretty(config)
        .map_err(|e| SolaceError::config_error(format!("failed to serialize config: {}", e)))?;
    fs::write(path, raw)
        .map_err(|e| SolaceError::config_error(format!("failed to write config file: {}", e)))
}

// The environment wins over the file.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(url) = env::var(BACKEND_URL_ENV) {
        if !url.trim().is_empty() {
            config.backend_url = url;
        }
    }
}

fn validate_config(config: &Config) -> SolaceResult<()> {
    if config.backend_url.trim().is_empty() {
        return Err(SolaceError::config_error("backend URL is required"));
    }

    if !config.backend_url.starts_with("http://") && !config.backend_url.starts_with("https://") {
        return Err(SolaceError::config_error(
            "backend URL must start with http:// or https://",
        ));
    }

    if config.log_spec.trim().is_empty() {
        return Err(SolaceError::config_error("log spec must not be empty"));
    }

    Ok(())
}
