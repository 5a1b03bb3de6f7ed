// File: src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Form behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub success: SuccessConfig,

    #[serde(default)]
    pub greeting: GreetingConfig,

    #[serde(default)]
    pub announce: AnnounceConfig,

    #[serde(default)]
    pub phone: PhoneConfig,
}

/// Success panel shown after an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessConfig {
    /// How long the panel stays visible (default: 10000)
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
}

/// Name prompt and welcome message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GreetingConfig {
    /// Browser-local storage key holding the visitor's name
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How long the name input stays highlighted after an empty submit
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
}

/// Screen reader announcements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnounceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Lifetime of the transient alert element
    #[serde(default = "default_clear_after_ms")]
    pub clear_after_ms: u64,
}

/// Phone input behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneConfig {
    /// Rewrite input as `(XXX) XXX-XXXX` while typing
    #[serde(default = "default_true")]
    pub auto_format: bool,
}

// Default values
fn default_auto_hide_ms() -> u64 {
    10_000
}

fn default_storage_key() -> String {
    "userName".to_string()
}

fn default_highlight_ms() -> u64 {
    2_000
}

fn default_clear_after_ms() -> u64 {
    1_000
}

fn default_true() -> bool {
    true
}

// Default implementations
impl Default for SuccessConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            highlight_ms: default_highlight_ms(),
        }
    }
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clear_after_ms: default_clear_after_ms(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self { auto_format: true }
    }
}

impl SuccessConfig {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }
}
