use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Shortener service settings (`[shortener]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// Base URL of the shortening proxy; requests go to `<endpoint>/api/<provider>`.
    pub endpoint: String,
    /// Provider name appended to the API path (e.g. "tinyurl", "isgd").
    pub provider: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8787".to_string(),
            provider: "tinyurl".to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 20,
        }
    }
}

/// Global configuration loaded from `~/.config/utmb/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtmbConfig {
    /// Optional override for the history file; defaults to the XDG state dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,
    #[serde(default)]
    pub shortener: ShortenerConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("utmb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UtmbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UtmbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UtmbConfig = toml::from_str(&data)?;
    Ok(cfg)
}
