use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variables consulted for the backend URL, in precedence order
pub const BACKEND_URL_ENV_VARS: [&str; 2] = ["HOTEL_THEME_BACKEND_URL", "BACKEND_URL"];

/// Persisted settings, read from `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Fully resolved settings used to build the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub backend_url: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("hotel-theme-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".hotel-theme-cli")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `config_path`, falling back to defaults when absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Resolve settings from the process environment
    pub fn resolve(&self, cli_backend_url: Option<&str>) -> Result<ClientSettings> {
        self.resolve_with(cli_backend_url, |name| std::env::var(name).ok())
    }

    /// Resolve settings: CLI flag, then env vars in order, then this file
    pub fn resolve_with<F>(&self, cli_backend_url: Option<&str>, env: F) -> Result<ClientSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = || {
            BACKEND_URL_ENV_VARS
                .iter()
                .find_map(|&name| env(name).filter(|value| !value.trim().is_empty()))
        };

        let backend_url = cli_backend_url
            .map(str::to_string)
            .filter(|value| !value.trim().is_empty())
            .or_else(from_env)
            .or_else(|| self.backend_url.clone())
            .with_context(|| {
                format!(
                    "No backend URL configured. Pass --backend-url or set {} or {}",
                    BACKEND_URL_ENV_VARS[0], BACKEND_URL_ENV_VARS[1]
                )
            })?;

        Ok(ClientSettings {
            backend_url,
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        })
    }
}
