//! Changeset model
//!
//! A changeset records one pending change: how it impacts the version
//! (major/minor/patch) and a free-text description. Any extra key-value
//! attributes on a record are carried verbatim so changelog templates can
//! use them; the core never interprets them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::VersetError;

/// Version impact of a change, ordered by severity (`Major` is highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Backwards-compatible bug fix
    Patch,
    /// Backwards-compatible feature
    Minor,
    /// Breaking change
    Major,
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patch => write!(f, "patch"),
            Self::Minor => write!(f, "minor"),
            Self::Major => write!(f, "major"),
        }
    }
}

impl std::str::FromStr for ChangeType {
    type Err = VersetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(VersetError::InvalidChangeType(s.to_string())),
        }
    }
}

/// A single pending or released change record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changeset {
    /// Version impact
    #[serde(rename = "type")]
    pub change_type: ChangeType,

    /// What changed, as shown in the changelog
    pub description: String,

    /// Custom attributes, passed through verbatim
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Changeset {
    /// Create a changeset with no custom attributes
    #[must_use]
    pub fn new(change_type: ChangeType, description: impl Into<String>) -> Self {
        Self {
            change_type,
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }
}

/// Sort changes for deterministic rendering: severity descending, then
/// description ascending
pub fn sort_changes(changes: &mut [Changeset]) {
    changes.sort_by(|a, b| {
        b.change_type
            .cmp(&a.change_type)
            .then_with(|| a.description.cmp(&b.description))
    });
}
