use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::HttpOptions;

/// Image directory of the storefront the built-in catalog was made for.
pub const DEFAULT_BASE_DIR: &str = "D:/Project_MI/Parampara_Foods/wwwroot/images/products";

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
/// Fields missing from the file take their default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory images are written to. Created (with parents) before a run.
    pub base_dir: PathBuf,
    /// Primary images smaller than this are treated as corrupt and fetched again.
    pub min_primary_bytes: u64,
    /// Minimum gap between consecutive requests, in milliseconds.
    pub request_delay_ms: u64,
    /// Total time allowed per request, in seconds.
    pub request_timeout_secs: u64,
    /// Connect phase timeout, in seconds.
    pub connect_timeout_secs: u64,
    /// Images per item: primary plus alternates. Values above 5 are capped.
    pub max_images_per_item: usize,
    /// Optional TOML catalog replacing the built-in product table.
    pub catalog_path: Option<PathBuf>,
    /// Optional User-Agent header; libcurl sends none by default.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            min_primary_bytes: 1000,
            request_delay_ms: 500,
            request_timeout_secs: 30,
            connect_timeout_secs: 15,
            max_images_per_item: 5,
            catalog_path: None,
            user_agent: None,
        }
    }
}

impl FetchConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            timeout: Duration::from_secs(self.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path (used by `--config` and tests).
pub fn load_or_init_at(path: &Path) -> Result<FetchConfig> {
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
