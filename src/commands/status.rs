//! Show the status of the working directory

use std::path::Path;

use verset::output::{OutputMode, StatusResult};
use verset::releaser::Releaser;

/// Show current version, computed next version and pending changes
pub fn status(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let status = Releaser::open(path).status()?;
    StatusResult {
        version: status.current_version,
        next_version: status.next_version,
        unreleased_changes: status.unreleased_changes,
    }
    .render(mode);
    Ok(())
}
