//! verset - changeset-based semantic versioning and changelog generation
//!
//! Track changes as changeset files, aggregate them into semantically
//! versioned releases, and render a changelog from the release history.

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

mod cli;
mod commands;

use colored::Colorize as _;
use verset::error::VersetError;

/// Exit code when `release` or `next-version` find nothing pending, so CI
/// pipelines can skip the release step without failing the build
const EXIT_NO_CHANGES: i32 = 2;

/// Main entry point for the verset CLI
fn main() {
    let code = match cli::run() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            match err.downcast_ref::<VersetError>() {
                Some(VersetError::NoChanges) => EXIT_NO_CHANGES,
                _ => 1,
            }
        }
    };
    std::process::exit(code);
}
