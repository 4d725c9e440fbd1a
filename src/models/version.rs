//! Semantic version triple and the next-version calculator
//!
//! A `Version` is an immutable (major, minor, patch) triple with the usual
//! total order and `"M.m.p"` string form. `next_version` is the pure bump
//! rule: the highest-severity pending change type decides which component
//! moves, and bumping a component resets everything below it to zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::VersetError;
use crate::models::ChangeType;

/// Semantic version as a (major, minor, patch) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    /// Incompatible API changes
    pub major: u64,
    /// Backwards-compatible functionality
    pub minor: u64,
    /// Backwards-compatible fixes
    pub patch: u64,
}

impl Version {
    /// The implicit starting point when no releases exist
    pub const ZERO: Self = Self {
        major: 0,
        minor: 0,
        patch: 0,
    };

    /// Create a version from its components
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Bump the component selected by `change_type`, resetting all lower
    /// components to zero
    #[must_use]
    pub const fn bump(self, change_type: ChangeType) -> Self {
        match change_type {
            ChangeType::Major => Self::new(self.major + 1, 0, 0),
            ChangeType::Minor => Self::new(self.major, self.minor + 1, 0),
            ChangeType::Patch => Self::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersetError::InvalidVersion(s.to_string());
        let mut parts = s.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok(Self::new(
            major.parse().map_err(|_| invalid())?,
            minor.parse().map_err(|_| invalid())?,
            patch.parse().map_err(|_| invalid())?,
        ))
    }
}

// Versions travel through JSON as plain "M.m.p" strings.
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Compute the next version from the set of pending change types.
///
/// The highest-severity type present wins (major > minor > patch). Fails
/// with `EmptyChangeSet` when `pending` is empty: there is no meaningful
/// next version with zero changes.
pub fn next_version(current: Version, pending: &[ChangeType]) -> Result<Version, VersetError> {
    let highest = pending
        .iter()
        .copied()
        .max()
        .ok_or(VersetError::EmptyChangeSet)?;
    Ok(current.bump(highest))
}
