//! Configuration management for opsdesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEBOUNCE_MAX_MS, NOTIFICATION_TIMEOUT_MAX_MS, NOTIFICATION_TIMEOUT_MIN_MS, PAGE_SIZE_DEFAULT,
    PAGE_SIZE_MAX, PAGE_SIZE_MIN,
};
use crate::domains::Domain;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub search: SearchConfig,
    pub export: ExportConfig,
    pub notifications: NotificationConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page to open on startup, e.g. "audit-logs", "roles", "tickets"
    pub default_page: String,
    /// Rows per page
    pub page_size: usize,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Delay before applying a typed search term (0 = apply on every keystroke)
    pub debounce_ms: u64,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exports are written to (defaults to the downloads directory)
    pub directory: Option<PathBuf>,
    /// Quote CSV cells containing commas, quotes or line breaks
    pub quote_fields: bool,
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a notification stays on screen
    pub timeout_ms: u64,
    /// Maximum notifications shown at once
    pub max_visible: usize,
}

/// Data loading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `<page>.json` record files; pages use sample data when unset
    pub directory: Option<PathBuf>,
    /// Show sample data when loading a page fails
    pub fallback_to_seed: bool,
    /// Simulated latency for sample data, in milliseconds
    pub simulated_latency_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page: Domain::AuditLogs.slug().to_string(),
            page_size: PAGE_SIZE_DEFAULT,
            mouse_enabled: true,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 4000,
            max_visible: 3,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: None,
            fallback_to_seed: true,
            simulated_latency_ms: 300,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl DataConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl ExportConfig {
    /// Resolved export directory: configured, else downloads, else the current directory
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("opsdesk.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("opsdesk").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.page_size < PAGE_SIZE_MIN || self.ui.page_size > PAGE_SIZE_MAX {
            anyhow::bail!(
                "page_size must be between {} and {}, got {}",
                PAGE_SIZE_MIN,
                PAGE_SIZE_MAX,
                self.ui.page_size
            );
        }

        if Domain::from_slug(&self.ui.default_page).is_none() {
            let available: Vec<&str> = Domain::ALL.iter().map(|d| d.slug()).collect();
            anyhow::bail!(
                "default_page '{}' not found. Available pages: {}",
                self.ui.default_page,
                available.join(", ")
            );
        }

        if self.search.debounce_ms > DEBOUNCE_MAX_MS {
            anyhow::bail!("debounce_ms cannot exceed {}", DEBOUNCE_MAX_MS);
        }

        if self.notifications.timeout_ms < NOTIFICATION_TIMEOUT_MIN_MS
            || self.notifications.timeout_ms > NOTIFICATION_TIMEOUT_MAX_MS
        {
            anyhow::bail!(
                "timeout_ms must be between {} and {}, got {}",
                NOTIFICATION_TIMEOUT_MIN_MS,
                NOTIFICATION_TIMEOUT_MAX_MS,
                self.notifications.timeout_ms
            );
        }

        if self.notifications.max_visible == 0 {
            anyhow::bail!("max_visible must be at least 1");
        }

        if let Some(dir) = &self.data.directory {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("data.directory cannot be empty");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# opsdesk Configuration File\n# Generated on {}\n\n",
            datetime::format_today()
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
            .map(|dir| dir.join("opsdesk"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
