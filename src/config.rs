//! Configuration management for admindash
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub table: TableConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// REST backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    pub connect_timeout_ms: u64,
    /// Total time allowed for one request, body included
    pub request_timeout_ms: u64,
}

/// Bearer token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Session storage key the token is kept under
    pub token_key: String,
    /// Environment variable used to seed the stored token at startup
    pub token_env: String,
}

/// Table screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub default_page_size: usize,
    /// Sizes offered by the rows-per-page selector
    pub page_size_options: Vec<usize>,
    /// Go back to the first page whenever the sort changes
    pub reset_page_on_sort: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Format for date-only fields (card date of birth)
    pub date_format: String,
    /// Format for timestamps
    pub datetime_format: String,
    /// Hours added to user creation timestamps on the users screen
    pub users_created_at_offset_hours: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Session database location; the platform data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            token_env: "ADMINDASH_TOKEN".to_string(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            reset_page_on_sort: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DATE_FORMAT.to_string(),
            datetime_format: datetime::DATETIME_FORMAT.to_string(),
            users_created_at_offset_hours: 7,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    pub fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("admindash.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path()?;
        if xdg_config.exists() {
            return Ok(Some(xdg_config));
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // API
        let base_url = self.api.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("base_url must start with http:// or https://, got '{}'", base_url);
        }
        if self.api.connect_timeout_ms == 0 || self.api.request_timeout_ms == 0 {
            anyhow::bail!("connect_timeout_ms and request_timeout_ms must be greater than 0");
        }

        // Auth
        if self.auth.token_key.trim().is_empty() {
            anyhow::bail!("token_key cannot be empty");
        }

        // Table
        if self.table.page_size_options.is_empty() {
            anyhow::bail!("page_size_options cannot be empty");
        }
        if self.table.page_size_options.contains(&0) {
            anyhow::bail!("page_size_options cannot contain 0");
        }
        if !self.table.page_size_options.contains(&self.table.default_page_size) {
            anyhow::bail!(
                "default_page_size {} must be one of page_size_options {:?}",
                self.table.default_page_size,
                self.table.page_size_options
            );
        }

        // Validate date/time formats
        if !datetime::is_valid_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }
        if !datetime::is_valid_format(&self.display.datetime_format) {
            anyhow::bail!("Invalid datetime_format '{}'", self.display.datetime_format);
        }
        if self.display.users_created_at_offset_hours.abs() > 24 {
            anyhow::bail!("users_created_at_offset_hours must be between -24 and 24");
        }

        Ok(())
    }

    /// Session database location, falling back to the platform data directory
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => crate::storage::LocalStorage::default_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory")),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# admindash Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("admindash"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
