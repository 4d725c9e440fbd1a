//! Print the changelog

use std::fs;
use std::path::Path;

use verset::changelog::render;
use verset::models::Version;
use verset::releaser::Releaser;

/// Render the changelog, optionally filtered to one version and with a
/// custom template file
pub fn changelog(
    path: &Path,
    version: Option<&str>,
    template: Option<&Path>,
) -> anyhow::Result<()> {
    let filter = version.map(str::parse::<Version>).transpose()?;
    let template = template.map(fs::read_to_string).transpose()?;

    let releases = Releaser::open(path).releases(filter)?;
    let rendered = render(&releases, template.as_deref())?;
    print!("{rendered}");
    Ok(())
}
