//! Version queries

use std::path::Path;

use verset::error::VersetError;
use verset::output::{OutputMode, VersionResult};
use verset::releaser::Releaser;

/// Show the latest released version (`0.0.0` when nothing was released)
pub fn current_version(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let version = Releaser::open(path).current_version()?;
    VersionResult { version }.render(mode);
    Ok(())
}

/// Show the version the pending changes would produce
pub fn next_version(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let version = Releaser::open(path)
        .next_version()?
        .ok_or(VersetError::NoChanges)?;
    VersionResult { version }.render(mode);
    Ok(())
}
