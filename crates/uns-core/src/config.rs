use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::SearchPath;

/// Resource file extension used when the config does not name one.
pub const DEFAULT_RESOURCE_EXTENSION: &str = "toml";

/// Global configuration loaded from `~/.config/uns/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsConfig {
    /// Search roots in priority order; each is scanned recursively.
    #[serde(default)]
    pub search_path: Vec<PathBuf>,
    /// Extension of loadable resource files, with or without the leading dot.
    #[serde(default = "default_resource_extension")]
    pub resource_extension: String,
}

fn default_resource_extension() -> String {
    DEFAULT_RESOURCE_EXTENSION.to_string()
}

impl Default for UnsConfig {
    fn default() -> Self {
        Self {
            search_path: Vec::new(),
            resource_extension: default_resource_extension(),
        }
    }
}

impl UnsConfig {
    /// `front` followed by the configured roots.
    pub fn search_path_after(&self, front: SearchPath) -> SearchPath {
        let mut search_path = front;
        for dir in &self.search_path {
            search_path.push(dir.clone());
        }
        search_path
    }

    /// Configured roots with `UNS_PATH` entries in front.
    pub fn effective_search_path(&self) -> SearchPath {
        self.search_path_after(SearchPath::from_env())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uns")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UnsConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<UnsConfig> {
    if !path.exists() {
        let default_cfg = UnsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UnsConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
