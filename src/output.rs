//! Output formatting for human and JSON modes
//!
//! Each command builds a structured result that renders either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize as _;
use serde::Serialize;

use crate::models::{Changeset, Version};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an `add-change` operation
#[derive(Debug, Serialize)]
pub struct AddChangeResult {
    /// Path of the record created
    pub path: String,
}

/// Result of a `release` operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReleaseResult {
    /// Version released from
    pub previous_version: Version,
    /// Version released
    pub version: Version,
    /// Number of changesets aggregated into the release
    pub changes: usize,
}

/// Result of a version query (`current-version`, `next-version`)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VersionResult {
    /// The queried version
    pub version: Version,
}

/// Result of a `status` operation
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Latest released version
    pub version: Version,
    /// Computed next version, when changes are pending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_version: Option<Version>,
    /// Pending changesets
    pub unreleased_changes: Vec<Changeset>,
}

/// Result of a `check-changeset` operation
#[derive(Debug, Serialize)]
pub struct CheckChangesetResult {
    /// Whether the branch passes
    pub ok: bool,
    /// Changed files matching the source pattern
    pub impacted_files: Vec<String>,
    /// Pending changeset records present in the diff
    pub changeset_files: Vec<String>,
}

impl AddChangeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("Successfully created file {}", self.path),
            OutputMode::Json => render_json(self),
        }
    }
}

impl ReleaseResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!(
                    "Releasing version: {} -> {}",
                    self.previous_version, self.version
                );
                println!("Successfully created new release: {}", self.version);
            }
            OutputMode::Json => render_json(self),
        }
    }
}

impl VersionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.version),
            OutputMode::Json => render_json(self),
        }
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Version: {}", self.version);
        if self.unreleased_changes.is_empty() {
            println!("No changes to release (use \"verset add-change\")");
            return;
        }
        if let Some(next) = self.next_version {
            println!("Next version: {next}");
        }
        println!("Unreleased changes:");
        for change in &self.unreleased_changes {
            println!(
                "{}",
                format!("\t{}:\t{}", change.change_type, change.description).red()
            );
        }
        println!("(use \"verset release\" to release the next version)");
    }
}

impl CheckChangesetResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.ok {
                    println!("OK");
                } else {
                    println!(
                        "{}",
                        "Error: changed files require a changeset (use \"verset add-change\")"
                            .red()
                    );
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
