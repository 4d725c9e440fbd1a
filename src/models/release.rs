//! Release model
//!
//! A release is an immutable aggregation of changesets bound to a version.
//! Once its record is persisted it is only ever read back, never mutated.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Changeset, Version, sort_changes};

/// An immutable, versioned aggregation of changesets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Version introduced by this release
    pub version: Version,

    /// When the release was cut (RFC 3339, second precision). Absent on
    /// records written by the deprecated pre-1.x layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Aggregated changes, severity descending then description ascending
    pub changes: Vec<Changeset>,
}

impl Release {
    /// Build a release stamped with the current UTC time, putting `changes`
    /// in deterministic rendering order
    #[must_use]
    pub fn new(version: Version, mut changes: Vec<Changeset>) -> Self {
        sort_changes(&mut changes);
        Self {
            version,
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            changes,
        }
    }
}
