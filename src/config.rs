use crate::utils::error::{AppError, AppResult};
use crate::utils::output::print_warning;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gradebook: GradebookConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    pub export_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    pub catalog_file: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            export_file: PathBuf::from("grade_output.csv"),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            catalog_file: PathBuf::from("catalog.json"),
        }
    }
}

impl Config {
    /// Load the per-user config. Never fails; see `load_or_default`.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_file_path())
    }

    /// Like `load_custom`, but any failure is reported and the defaults are used
    pub fn load_or_default(config_path: &Path) -> Self {
        match Self::load_custom(config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "using default configuration");
                print_warning(&format!(
                    "Ignoring config {}: {}",
                    config_path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Read a config file, writing the defaults there first if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.gradebook.export_file.as_os_str().is_empty() {
            return Err(AppError::Config("Export file cannot be empty".to_string()));
        }

        if self.library.catalog_file.as_os_str().is_empty() {
            return Err(AppError::Config("Catalog file cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("classdesk")
            .join("config.toml")
    }

    /// Turn ANSI colours on or off for the whole process
    pub fn apply_color(&self) {
        if !self.general.color {
            colored::control::set_override(false);
        }
    }
}
