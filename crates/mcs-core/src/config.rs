use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resource::ResourceLayout;

/// Subdirectory of the XDG cache home holding resource directories.
const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Global configuration loaded from `~/.config/mcs/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McsConfig {
    /// Base directory for every resource directory. If missing,
    /// `~/.cache/mcs/resources` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_root: Option<PathBuf>,
}

impl McsConfig {
    /// Configured cache root, or the XDG default.
    pub fn cache_root(&self) -> Result<PathBuf> {
        match &self.cache_root {
            Some(root) => Ok(root.clone()),
            None => default_cache_root(),
        }
    }

    /// Resource layout rooted at [`cache_root`](Self::cache_root).
    pub fn layout(&self) -> Result<ResourceLayout> {
        Ok(ResourceLayout::new(self.cache_root()?))
    }
}

pub fn default_cache_root() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcs")?;
    Ok(xdg_dirs.get_cache_home().join(DEFAULT_RESOURCES_DIR))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<McsConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<McsConfig> {
    if !path.exists() {
        let default_cfg = McsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: McsConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_cache_root() {
        let cfg = McsConfig::default();
        assert!(cfg.cache_root.is_none());
    }

    #[test]
    fn config_toml_custom_cache_root() {
        let toml = r#"
            cache_root = "/srv/media-cache"
        "#;
        let cfg: McsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.cache_root.as_deref(), Some(Path::new("/srv/media-cache")));
        assert_eq!(cfg.cache_root().unwrap(), PathBuf::from("/srv/media-cache"));
        assert_eq!(cfg.layout().unwrap().root(), Path::new("/srv/media-cache"));
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg: McsConfig = toml::from_str("").unwrap();
        assert!(cfg.cache_root.is_none());
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let first = load_or_init_at(&path).unwrap();
        assert!(first.cache_root.is_none());
        assert!(path.is_file());

        fs::write(&path, "cache_root = \"/tmp/mcs-test\"\n").unwrap();
        let second = load_or_init_at(&path).unwrap();
        assert_eq!(second.cache_root, Some(PathBuf::from("/tmp/mcs-test")));
    }
}
