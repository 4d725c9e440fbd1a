//! Error types for the version-state engine
//!
//! Every failure surfaces to the CLI layer as its originating condition;
//! nothing is swallowed or downgraded on the way up.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Version;

/// Errors surfaced by the verset core
#[derive(Debug, Error)]
pub enum VersetError {
    /// A release was attempted with nothing pending
    #[error("no changes to release")]
    NoChanges,

    /// A release record for the computed version already exists
    #[error("release {0} already exists; refusing to overwrite history")]
    DuplicateVersion(Version),

    /// A pending or release record failed to parse
    #[error("malformed record '{name}': {reason}")]
    MalformedRecord {
        /// File name of the offending record
        name: String,
        /// Parse failure detail
        reason: String,
    },

    /// A version bump was requested over an empty change set
    #[error("cannot compute the next version from an empty change set")]
    EmptyChangeSet,

    /// A version string did not parse as `major.minor.patch`
    #[error("invalid version '{0}', expected major.minor.patch")]
    InvalidVersion(String),

    /// A change type string was not one of major, minor, patch
    #[error("invalid change type '{0}', expected major, minor or patch")]
    InvalidChangeType(String),

    /// The backing store failed to read, write or delete a record
    #[error("storage error at '{}': {source}", path.display())]
    Store {
        /// Path the backing store was operating on
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
