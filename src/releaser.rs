//! Release orchestration
//!
//! Ties the changeset store and the version calculator together: pending
//! records in, an immutable released version record out. All operations are
//! synchronous and scoped to one working directory.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::error::VersetError;
use crate::models::{ChangeType, Changeset, Release, Version, next_version};
use crate::storage::{ChangesetStore, fs::FsStore};

/// Snapshot of a working directory's release state
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseStatus {
    /// Latest released version, `0.0.0` when nothing was released yet
    pub current_version: Version,
    /// Version the pending changes would produce, when any are pending
    pub next_version: Option<Version>,
    /// Pending changesets, severity descending then description ascending
    pub unreleased_changes: Vec<Changeset>,
}

/// Orchestrates the pending → released lifecycle for one working directory
#[derive(Debug)]
pub struct Releaser {
    store: ChangesetStore,
}

impl Releaser {
    /// Open a releaser over `root` with the filesystem backend and the
    /// directory's `.verset.toml` settings
    #[must_use]
    pub fn open(root: &Path) -> Self {
        let config = Config::load(root);
        Self::new(ChangesetStore::new(
            Box::new(FsStore),
            root,
            config.storage.on_malformed,
        ))
    }

    /// Wrap an existing store
    #[must_use]
    pub const fn new(store: ChangesetStore) -> Self {
        Self { store }
    }

    /// The underlying changeset store
    #[must_use]
    pub const fn store(&self) -> &ChangesetStore {
        &self.store
    }

    /// Record a new pending changeset; returns the created record path
    pub fn add_change(&self, changeset: &Changeset) -> Result<PathBuf, VersetError> {
        self.store.add_pending(changeset)
    }

    /// Latest released version, or `0.0.0` when no releases exist
    pub fn current_version(&self) -> Result<Version, VersetError> {
        Ok(self
            .store
            .latest_release()?
            .map_or(Version::ZERO, |release| release.version))
    }

    /// Version the pending changes would produce, or `None` with nothing
    /// pending. Performs no writes.
    pub fn next_version(&self) -> Result<Option<Version>, VersetError> {
        let pending = self.store.list_pending()?;
        if pending.is_empty() {
            return Ok(None);
        }
        let types = change_types(&pending);
        Ok(Some(next_version(self.current_version()?, &types)?))
    }

    /// Aggregate all pending changesets into a new released version.
    ///
    /// The release record is written before the pending records are removed.
    /// A crash in between leaves the release persisted and the pending
    /// records intact; re-running then fails with `DuplicateVersion` (the
    /// latest release already holds exactly these changes) instead of
    /// silently releasing them twice.
    pub fn release(&self) -> Result<Release, VersetError> {
        let changes = self.store.list_pending()?;
        if changes.is_empty() {
            return Err(VersetError::NoChanges);
        }

        let latest = self.store.latest_release()?;
        if let Some(latest) = &latest
            && latest.changes == changes
        {
            return Err(VersetError::DuplicateVersion(latest.version));
        }

        let current = latest.map_or(Version::ZERO, |release| release.version);
        let version = next_version(current, &change_types(&changes))?;
        debug!("releasing {current} -> {version}");

        let release = Release::new(version, changes);
        self.store.write_release(&release)?;
        self.store.clear_pending()?;
        Ok(release)
    }

    /// Release history ascending by version, optionally narrowed to exactly
    /// one version. The renderer may reverse it for display.
    pub fn releases(&self, filter_version: Option<Version>) -> Result<Vec<Release>, VersetError> {
        let mut releases = self.store.list_releases()?;
        if let Some(version) = filter_version {
            releases.retain(|release| release.version == version);
        }
        Ok(releases)
    }

    /// Snapshot the current version, computed next version and pending
    /// changes
    pub fn status(&self) -> Result<ReleaseStatus, VersetError> {
        let unreleased_changes = self.store.list_pending()?;
        let current_version = self.current_version()?;
        let next_version = if unreleased_changes.is_empty() {
            None
        } else {
            Some(next_version(
                current_version,
                &change_types(&unreleased_changes),
            )?)
        };
        Ok(ReleaseStatus {
            current_version,
            next_version,
            unreleased_changes,
        })
    }
}

fn change_types(changes: &[Changeset]) -> Vec<ChangeType> {
    changes.iter().map(|change| change.change_type).collect()
}
