use directories::ProjectDirs;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use texture_material::ImportConfiguration;

const CONFIG_FILE: &str = "import.toml";

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("me", "liesegang", "texture_import") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        return Some(config_dir.join(CONFIG_FILE));
    }
    None
}

/// Reads `path`, or the default config location when `path` is `None`.
///
/// A missing or broken file is not an error: the defaults are used instead.
pub fn load_config(path: Option<&Path>) -> ImportConfiguration {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => get_config_path(),
    };
    if let Some(path) = path {
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(toml_str) => match ImportConfiguration::from_toml_str(&toml_str) {
                    Ok(config) => {
                        info!("Loaded import settings from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to parse config file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
    }
    ImportConfiguration::default()
}

pub fn save_config(config: &ImportConfiguration, path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()
            .ok_or_else(|| anyhow::anyhow!("no config directory available"))?,
    };
    fs::write(&path, config.to_toml_string()?)?;
    info!("Import settings saved to {}", path.display());
    Ok(path)
}
