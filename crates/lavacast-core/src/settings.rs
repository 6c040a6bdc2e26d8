use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default server address when no settings file exists yet.
pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost:3000";

fn default_server_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

/// Persisted settings, loaded from `~/.config/lavacast/config.toml`.
///
/// A single recognized field; anything missing from the file falls back to
/// the default so older files keep loading after upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base address of the lava-vtt server, e.g. `http://localhost:3000`.
    #[serde(default = "default_server_address")]
    pub server_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lavacast")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        let defaults = Settings::default();
        save(&defaults)?;
        tracing::info!("created default settings at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&data)?;
    Ok(settings)
}

/// Persist the complete settings object, replacing whatever was stored.
pub fn save(settings: &Settings) -> Result<()> {
    let path = config_path()?;
    let toml = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml)?;
    Ok(())
}
