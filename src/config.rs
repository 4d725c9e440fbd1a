//! Project configuration
//!
//! `.verset.toml` in the working directory tunes store behavior:
//!
//! ```toml
//! [storage]
//! on-malformed = "abort"   # or "skip"
//! ```
//!
//! A missing or unreadable file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Project verset configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store behavior
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Store behavior settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// What to do with pending records that fail to parse
    #[serde(default, rename = "on-malformed")]
    pub on_malformed: MalformedPolicy,
}

/// Policy for pending records that fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole listing, identifying the offending record (default)
    #[default]
    Abort,
    /// Log a warning and skip the offending record
    Skip,
}

impl Config {
    /// Load config from `<root>/.verset.toml`, or defaults if absent
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let path = paths::config_file(root);
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
