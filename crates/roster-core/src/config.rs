//! Configuration for roster-core
//!
//! Matching knobs and data-quality reporting switches. Defaults reproduce
//! the standard permissive matching rules exactly; quality switches only
//! control which issues are collected, never the display output.
//!
//! ```toml
//! [matching]
//! allow_substring = true
//! min_substring_len = 1
//! match_chinese_name = true
//!
//! [quality]
//! report_missing_citation = true
//! report_unlinked_members = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Engine-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Fragment-to-member matching rules
    pub matching: MatchingConfig,
    /// Which data-quality issues to report
    pub quality: QualityConfig,
}

/// Fragment-to-member matching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Accept containment in either direction, not just equality
    pub allow_substring: bool,
    /// Shortest string (in chars) that may count as contained in the other
    pub min_substring_len: usize,
    /// Compare the raw fragment against members' Chinese names
    pub match_chinese_name: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            allow_substring: true,
            min_substring_len: 1,
            match_chinese_name: true,
        }
    }
}

/// Data-quality reporting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Report publications rendered from links alone
    pub report_missing_citation: bool,
    /// Report linked members that never matched a citation fragment
    pub report_unlinked_members: bool,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            report_missing_citation: true,
            report_unlinked_members: true,
        }
    }
}

impl RosterConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Per-user config location, e.g. `~/.config/roster/config.toml`
    #[cfg(feature = "cli")]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.matching.allow_substring && self.matching.min_substring_len == 0 {
            return Err(ConfigError::OutOfRange(
                "min_substring_len must be at least 1 when allow_substring is set".to_string(),
            ));
        }
        Ok(())
    }
}
