//! Record storage for pending changesets and released versions
//!
//! Record naming, the two-tier layout and existence checks live here. The
//! backing store is abstracted as `RecordStore` (list/read/write/delete/
//! exists) so the same logic runs against the filesystem in production and
//! the in-memory backend in tests:
//! - `fs`: plain files under `.verset/` (default)
//! - `memory`: map-backed fake

pub mod fs;
pub mod memory;

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};

use crate::config::MalformedPolicy;
use crate::error::VersetError;
use crate::models::{Changeset, Release, Version, sort_changes};
use crate::paths;

/// Capability set required from a backing store.
///
/// Records are immutable, so `write` is create-only: it must fail when an
/// entry already exists at the path.
pub trait RecordStore: Send + Sync {
    /// Entry names directly under `dir`; empty when `dir` does not exist
    fn list(&self, dir: &Path) -> std::io::Result<Vec<String>>;

    /// Full contents of the record at `path`
    fn read(&self, path: &Path) -> std::io::Result<String>;

    /// Create the record at `path`; fails if an entry already exists there
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;

    /// Remove the record at `path`
    fn delete(&self, path: &Path) -> std::io::Result<()>;

    /// Whether an entry exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

/// Store for pending changeset records and released version records
pub struct ChangesetStore {
    backend: Box<dyn RecordStore>,
    root: PathBuf,
    store_dir: PathBuf,
    next_release_dir: PathBuf,
    on_malformed: MalformedPolicy,
    deprecated: bool,
}

impl std::fmt::Debug for ChangesetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangesetStore")
            .field("root", &self.root)
            .field("store_dir", &self.store_dir)
            .field("on_malformed", &self.on_malformed)
            .field("deprecated", &self.deprecated)
            .finish_non_exhaustive()
    }
}

impl ChangesetStore {
    /// Open a store over `root`. When only the deprecated `.changes`
    /// directory exists it is used and the store reports deprecation.
    #[must_use]
    pub fn new(
        backend: Box<dyn RecordStore>,
        root: impl Into<PathBuf>,
        on_malformed: MalformedPolicy,
    ) -> Self {
        let root = root.into();
        let current = paths::store_dir(&root);
        let legacy = paths::legacy_store_dir(&root);
        let deprecated = backend.exists(&legacy) && !backend.exists(&current);
        let store_dir = if deprecated { legacy } else { current };
        let next_release_dir = store_dir.join(paths::NEXT_RELEASE_DIR);
        Self {
            backend,
            root,
            store_dir,
            next_release_dir,
            on_malformed,
            deprecated,
        }
    }

    /// Working directory this store operates on
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store directory name in use (`.verset`, or `.changes` when deprecated)
    #[must_use]
    pub const fn dir_name(&self) -> &'static str {
        if self.deprecated {
            paths::LEGACY_DIR
        } else {
            paths::VERSET_DIR
        }
    }

    /// Whether the deprecated `.changes` layout is in use
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Serialize `changeset` to a uniquely named record in the pending area.
    ///
    /// The name combines the change type with a microsecond UTC timestamp;
    /// if that name is taken, a numeric suffix is appended until it is free,
    /// so same-tick calls never collide. Returns the record path.
    pub fn add_pending(&self, changeset: &Changeset) -> Result<PathBuf, VersetError> {
        let stamp = Utc::now().format("%Y%m%d%H%M%S%6f");
        let base = format!("{}-{stamp}", changeset.change_type);
        let mut name = format!("{base}{}", paths::RECORD_EXT);
        let mut attempt = 0u32;
        while self.backend.exists(&self.next_release_dir.join(&name)) {
            attempt += 1;
            name = format!("{base}-{attempt}{}", paths::RECORD_EXT);
        }

        let path = self.next_release_dir.join(name);
        let contents = to_record_json(changeset, &path)?;
        self.backend
            .write(&path, &contents)
            .map_err(|source| VersetError::Store {
                path: path.clone(),
                source,
            })?;
        debug!("created pending record {}", path.display());
        Ok(path)
    }

    /// Read every valid pending record, severity descending then description
    /// ascending.
    ///
    /// A record that fails to parse aborts the listing with the offending
    /// file name, or is logged and skipped, per the configured policy.
    pub fn list_pending(&self) -> Result<Vec<Changeset>, VersetError> {
        let mut changes = Vec::new();
        for name in self.record_names(&self.next_release_dir)? {
            let path = self.next_release_dir.join(&name);
            let contents = self.read_record(&path)?;
            match parse_changeset(&contents) {
                Ok(changeset) => changes.push(changeset),
                Err(reason) => match self.on_malformed {
                    MalformedPolicy::Abort => {
                        return Err(VersetError::MalformedRecord { name, reason });
                    }
                    MalformedPolicy::Skip => {
                        warn!("skipping malformed pending record '{name}': {reason}");
                    }
                },
            }
        }
        sort_changes(&mut changes);
        Ok(changes)
    }

    /// Whether any pending changeset records exist
    pub fn has_pending(&self) -> Result<bool, VersetError> {
        Ok(!self.list_pending()?.is_empty())
    }

    /// Delete every pending record that parses as a changeset.
    ///
    /// Foreign files and (under the skip policy) malformed records are left
    /// alone, as is the pending directory itself.
    pub fn clear_pending(&self) -> Result<(), VersetError> {
        for name in self.record_names(&self.next_release_dir)? {
            let path = self.next_release_dir.join(&name);
            let contents = self.read_record(&path)?;
            if parse_changeset(&contents).is_ok() {
                self.backend
                    .delete(&path)
                    .map_err(|source| VersetError::Store {
                        path: path.clone(),
                        source,
                    })?;
                debug!("removed pending record {}", path.display());
            }
        }
        Ok(())
    }

    /// All persisted releases, ascending by version.
    ///
    /// Files whose names are not `M.m.p.json` are ignored; a version file
    /// that fails to parse is always an error regardless of the pending
    /// record policy.
    pub fn list_releases(&self) -> Result<Vec<Release>, VersetError> {
        let mut releases = Vec::new();
        for name in self.record_names(&self.store_dir)? {
            let Some(version) = name
                .strip_suffix(paths::RECORD_EXT)
                .and_then(|stem| stem.parse::<Version>().ok())
            else {
                continue;
            };
            let path = self.store_dir.join(&name);
            let contents = self.read_record(&path)?;
            let release = parse_release(&contents, version)
                .map_err(|reason| VersetError::MalformedRecord { name, reason })?;
            releases.push(release);
        }
        releases.sort_by_key(|release| release.version);
        Ok(releases)
    }

    /// Persist `release` as an immutable record.
    ///
    /// Fails with `DuplicateVersion` when a record for that exact version
    /// already exists; history is never overwritten.
    pub fn write_release(&self, release: &Release) -> Result<PathBuf, VersetError> {
        let path = self
            .store_dir
            .join(format!("{}{}", release.version, paths::RECORD_EXT));
        if self.backend.exists(&path) {
            return Err(VersetError::DuplicateVersion(release.version));
        }

        let contents = to_record_json(release, &path)?;
        self.backend.write(&path, &contents).map_err(|source| {
            if source.kind() == std::io::ErrorKind::AlreadyExists {
                VersetError::DuplicateVersion(release.version)
            } else {
                VersetError::Store {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        debug!("created release record {}", path.display());
        Ok(path)
    }

    /// The release with the greatest version, or `None` when none exist
    pub fn latest_release(&self) -> Result<Option<Release>, VersetError> {
        Ok(self.list_releases()?.pop())
    }

    fn record_names(&self, dir: &Path) -> Result<Vec<String>, VersetError> {
        let mut names: Vec<String> = self
            .backend
            .list(dir)
            .map_err(|source| VersetError::Store {
                path: dir.to_path_buf(),
                source,
            })?
            .into_iter()
            .filter(|name| name.ends_with(paths::RECORD_EXT))
            .collect();
        names.sort();
        Ok(names)
    }

    fn read_record(&self, path: &Path) -> Result<String, VersetError> {
        self.backend.read(path).map_err(|source| VersetError::Store {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn to_record_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<String, VersetError> {
    let mut contents =
        serde_json::to_string_pretty(value).map_err(|source| VersetError::Store {
            path: path.to_path_buf(),
            source: std::io::Error::other(source),
        })?;
    contents.push('\n');
    Ok(contents)
}

fn parse_changeset(contents: &str) -> Result<Changeset, String> {
    let changeset: Changeset =
        serde_json::from_str(contents).map_err(|err| err.to_string())?;
    if changeset.description.trim().is_empty() {
        return Err("description must not be empty".to_string());
    }
    Ok(changeset)
}

fn parse_release(contents: &str, version: Version) -> Result<Release, String> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|err| err.to_string())?;
    if value.is_array() {
        // Pre-1.x release files are a bare array of changesets; the version
        // comes from the file name.
        let mut changes: Vec<Changeset> =
            serde_json::from_value(value).map_err(|err| err.to_string())?;
        sort_changes(&mut changes);
        return Ok(Release {
            version,
            created_at: None,
            changes,
        });
    }
    let mut release: Release = serde_json::from_value(value).map_err(|err| err.to_string())?;
    sort_changes(&mut release.changes);
    Ok(release)
}
