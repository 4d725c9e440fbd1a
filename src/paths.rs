//! Record layout for the verset store
//!
//! Single source of truth for the on-disk layout. Per working directory:
//!
//! ```text
//! <root>/
//! ├── .verset.toml                          # optional project config
//! └── .verset/
//!     ├── next-release/
//!     │   ├── minor-20250101093000123456.json   # pending changeset records
//!     │   └── major-20250102093000123456.json
//!     ├── 1.1.0.json                        # one file per released version
//!     └── 1.2.0.json
//! ```
//!
//! `.changes` is the deprecated pre-1.x store directory; it is still used
//! when it is the only one present.

use std::path::{Path, PathBuf};

/// Directory name for the record store
pub const VERSET_DIR: &str = ".verset";

/// Deprecated record store directory name
pub const LEGACY_DIR: &str = ".changes";

/// Subdirectory holding pending changeset records
pub const NEXT_RELEASE_DIR: &str = "next-release";

/// Project configuration filename
pub const VERSET_TOML: &str = ".verset.toml";

/// Extension shared by all record files
pub const RECORD_EXT: &str = ".json";

/// Store directory inside a working directory
#[must_use]
pub fn store_dir(root: &Path) -> PathBuf {
    root.join(VERSET_DIR)
}

/// Deprecated store directory inside a working directory
#[must_use]
pub fn legacy_store_dir(root: &Path) -> PathBuf {
    root.join(LEGACY_DIR)
}

/// Project config file inside a working directory
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(VERSET_TOML)
}
