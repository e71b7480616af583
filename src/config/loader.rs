use anyhow::{Context, Result};
use std::path::Path;

use super::Config;

/// Configuration file names, in lookup order
pub const CONFIG_FILE_NAMES: &[&str] = &["projectfiles-check.toml", ".projectfiles-check.toml"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Find and load configuration file
/// Searches in current directory and parent directories for projectfiles-check.toml
pub fn find_and_load_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir()?;
    find_and_load_config_from(&current_dir)
}

/// Same as [`find_and_load_config`], starting from `start` instead of the
/// working directory
pub fn find_and_load_config_from(start: &Path) -> Result<Option<Config>> {
    let mut current_dir = start.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(name);
            if config_path.is_file() {
                let config = load_config(&config_path)?;
                return Ok(Some(config));
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load `--config` if given, otherwise search upwards, otherwise use defaults
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => Ok(find_and_load_config()?.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp_dir.path().join(".projectfiles-check.toml"),
            "[record]\npath = \"fp.txt\"\n",
        )
        .unwrap();

        let config = find_and_load_config_from(&nested).unwrap().unwrap();
        assert_eq!(config.record.path, std::path::PathBuf::from("fp.txt"));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projectfiles-check.toml");
        std::fs::write(&path, "[scan]\npatterns = 3\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
