//! Configuration file parser for ~/.config/daily-digest/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use crate::digest::Category;
use chrono::FixedOffset;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    /// A value parsed but is out of range.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site root the digest is published under.
    pub base_url: String,

    /// Directory below `base_url` holding `<date>.json` and `<date>.md`.
    pub data_dir: String,

    /// Offset of the civil timezone that defines "today" (JST by default).
    pub utc_offset_hours: i32,

    /// Per-request timeout for document and markdown fetches.
    pub request_timeout_secs: u64,

    /// Tab shown first.
    pub default_category: Category,

    /// Rendering options.
    pub view: ViewSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            data_dir: "data".to_string(),
            utc_offset_hours: 9,
            request_timeout_secs: 12,
            default_category: Category::default(),
            view: ViewSettings::default(),
        }
    }
}

/// Options consumed by the card renderer and view mount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// chrono format for the document date in the headline.
    pub headline_date_format: String,

    /// chrono format for item publish dates on cards.
    pub publish_date_format: String,

    /// Fallback cover image for news cards; `{host}` is replaced by the link host.
    pub favicon_url_template: String,

    /// Text of the call-to-action link in each card footer.
    pub cta_label: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            headline_date_format: "%Y-%m-%d (%a)".to_string(),
            publish_date_format: "%Y-%m-%d".to_string(),
            favicon_url_template: "https://www.google.com/s2/favicons?sz=256&domain={host}"
                .to_string(),
            cta_label: "Read original →".to_string(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Out-of-range values → `Err(ConfigError::Invalid)`
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading to prevent memory exhaustion
        // from a maliciously large or corrupted config file.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {} // Size is within limits, proceed
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "base_url",
                "data_dir",
                "utc_offset_hours",
                "request_timeout_secs",
                "default_category",
                "view",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!(path = %path.display(), base_url = %config.base_url, "Loaded configuration");
        Ok(config)
    }

    /// Check values serde cannot range-check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timezone()?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The fixed civil timezone used to compute today's date key.
    pub fn timezone(&self) -> Result<FixedOffset, ConfigError> {
        if !(-14..=14).contains(&self.utc_offset_hours) {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_hours must be between -14 and 14, got {}",
                self.utc_offset_hours
            )));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "utc_offset_hours out of range: {}",
                self.utc_offset_hours
            ))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ============================================================================
// Tests
// ============================================================================
