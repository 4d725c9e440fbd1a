//! Data models for verset
//!
//! Core abstractions:
//! - Changeset: one recorded change with a severity type and description
//! - Version: semantic version triple with bump/reset rules
//! - Release: an immutable, versioned aggregation of changesets

pub mod change;
pub mod release;
pub mod version;

pub use change::{ChangeType, Changeset, sort_changes};
pub use release::Release;
pub use version::{Version, next_version};
