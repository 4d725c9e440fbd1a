//! Release a new version from the pending changesets

use std::path::Path;

use colored::Colorize as _;

use verset::output::{OutputMode, ReleaseResult};
use verset::releaser::Releaser;

/// Aggregate the pending changesets into a new immutable release
pub fn release(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let releaser = Releaser::open(path);

    if releaser.store().is_deprecated() {
        eprintln!(
            "{} verset now uses the '.verset' directory instead of '.changes'. \
             Please rename it to remove this message.",
            "WARN deprecated".yellow()
        );
    }

    let previous_version = releaser.current_version()?;
    let release = releaser.release()?;

    ReleaseResult {
        previous_version,
        version: release.version,
        changes: release.changes.len(),
    }
    .render(mode);
    Ok(())
}
