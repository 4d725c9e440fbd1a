//! verset - changeset-based semantic versioning and changelog generation
//!
//! This library tracks pending changes as discrete changeset records,
//! aggregates them into dated release versions following semantic-versioning
//! rules, and reconstructs an ordered release history for changelog
//! rendering.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod changelog;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod paths;
pub mod releaser;
pub mod storage;
