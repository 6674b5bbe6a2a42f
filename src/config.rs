use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkshopConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WorkshopConfig {
    /// Apply command-line / environment overrides on top of the file values.
    pub fn with_overrides(mut self, api_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if token.is_some() {
            self.token = token;
        }
        self
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "workshop", "workshop")
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn data_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn config_file_path() -> Result<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub fn load_config() -> Result<WorkshopConfig> {
    load_config_from(&config_file_path()?)
}

pub fn load_config_from(file: &Path) -> Result<WorkshopConfig> {
    if !file.exists() {
        return Ok(WorkshopConfig::default());
    }
    let content = fs::read_to_string(file)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_config_to(file: &Path, config: &WorkshopConfig) -> Result<()> {
    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;

    // Atomic write: write to temp file then rename
    let temp_file = file.with_extension("toml.tmp");
    fs::write(&temp_file, content)?;
    fs::rename(&temp_file, file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, WorkshopConfig::default());
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("config.toml");
        let cfg = WorkshopConfig {
            api_url: "https://shop.example.com/api".to_string(),
            token: Some("secret".to_string()),
            request_timeout_secs: 5,
        };
        save_config_to(&file, &cfg).unwrap();
        assert!(!file.with_extension("toml.tmp").exists());
        assert_eq!(load_config_from(&file).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "token = \"abc\"\n").unwrap();
        let cfg = load_config_from(&file).unwrap();
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn overrides_win_over_file_values() {
        let cfg = WorkshopConfig::default()
            .with_overrides(Some("http://other/api".to_string()), None);
        assert_eq!(cfg.api_url, "http://other/api");
        assert_eq!(cfg.token, None);
    }
}
