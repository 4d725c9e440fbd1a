//! Verify changeset files accompany source changes
//!
//! Meant for CI on pull requests: if the branch changes files matching the
//! source pattern, it must also carry a pending changeset record.

use std::path::Path;
use std::process::Command;

use glob::Pattern;

use verset::output::{CheckChangesetResult, OutputMode};
use verset::paths;
use verset::releaser::Releaser;

/// Check the diff against `base` for source changes lacking a changeset.
///
/// Passes when no `src`-matching files changed, or when the diff includes a
/// pending changeset record.
pub fn check_changeset(path: &Path, src: &str, base: &str, mode: OutputMode) -> anyhow::Result<()> {
    let pattern = Pattern::new(src)?;

    let output = Command::new("git")
        .args(["diff", "--name-only", base])
        .current_dir(path)
        .output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git diff against '{base}' failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let releaser = Releaser::open(path);
    let pending_prefix = format!(
        "{}/{}/",
        releaser.store().dir_name(),
        paths::NEXT_RELEASE_DIR
    );

    let changed: Vec<String> = String::from_utf8(output.stdout)?
        .lines()
        .map(str::to_string)
        .collect();
    let impacted_files: Vec<String> = changed
        .iter()
        .filter(|file| pattern.matches(file))
        .cloned()
        .collect();
    let changeset_files: Vec<String> = changed
        .iter()
        .filter(|file| file.starts_with(&pending_prefix))
        .cloned()
        .collect();

    let ok = impacted_files.is_empty() || !changeset_files.is_empty();
    CheckChangesetResult {
        ok,
        impacted_files,
        changeset_files,
    }
    .render(mode);

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
