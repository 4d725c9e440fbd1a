//! Tests for the changeset store over the in-memory backend

use verset::config::MalformedPolicy;
use verset::error::VersetError;
use verset::models::{ChangeType, Release, Version};
use verset::storage::ChangesetStore;
use verset::storage::memory::MemoryStore;

use crate::common::fixtures::{changeset, pending_path, release_path, store};

// =============================================================================
// PENDING RECORDS
// =============================================================================

#[test]
fn test_add_pending_creates_named_record() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);

    let path = store
        .add_pending(&changeset(ChangeType::Patch, "Fix bug"))
        .unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("patch-"), "unexpected name {name}");
    assert!(name.ends_with(".json"));
    assert!(path.starts_with("/repo/.verset/next-release"));
    assert_eq!(backend.paths(), vec![path]);
}

#[test]
fn test_pending_round_trip() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);

    let mut original = changeset(ChangeType::Minor, "Add feature");
    original.attributes.insert(
        "issue".to_string(),
        serde_json::Value::String("GH-7".to_string()),
    );
    store.add_pending(&original).unwrap();

    let listed = store.list_pending().unwrap();
    assert_eq!(listed, vec![original]);
}

#[test]
fn test_same_second_adds_do_not_collide() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);

    for i in 0..25 {
        store
            .add_pending(&changeset(ChangeType::Patch, &format!("Fix {i}")))
            .unwrap();
    }

    assert_eq!(backend.paths().len(), 25);
    assert_eq!(store.list_pending().unwrap().len(), 25);
}

#[test]
fn test_list_pending_deterministic_order() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);

    store.add_pending(&changeset(ChangeType::Patch, "B fix")).unwrap();
    store.add_pending(&changeset(ChangeType::Major, "Break")).unwrap();
    store.add_pending(&changeset(ChangeType::Patch, "A fix")).unwrap();
    store.add_pending(&changeset(ChangeType::Minor, "Add")).unwrap();

    let descriptions: Vec<String> = store
        .list_pending()
        .unwrap()
        .into_iter()
        .map(|c| c.description)
        .collect();
    assert_eq!(descriptions, vec!["Break", "Add", "A fix", "B fix"]);
}

#[test]
fn test_has_pending() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);

    assert!(!store.has_pending().unwrap());
    store.add_pending(&changeset(ChangeType::Patch, "Fix")).unwrap();
    assert!(store.has_pending().unwrap());
}

// =============================================================================
// MALFORMED RECORD POLICY
// =============================================================================

#[test]
fn test_malformed_record_aborts_by_default() {
    let backend = MemoryStore::new();
    backend.seed(pending_path("patch-1.json"), "{not json");
    let store = store(&backend, MalformedPolicy::Abort);

    let result = store.list_pending();
    match result {
        Err(VersetError::MalformedRecord { name, .. }) => {
            assert_eq!(name, "patch-1.json");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_empty_description_is_malformed() {
    let backend = MemoryStore::new();
    backend.seed(
        pending_path("patch-1.json"),
        r#"{"type": "patch", "description": "   "}"#,
    );
    let store = store(&backend, MalformedPolicy::Abort);

    assert!(matches!(
        store.list_pending(),
        Err(VersetError::MalformedRecord { .. })
    ));
}

#[test]
fn test_malformed_record_skipped_when_configured() {
    let backend = MemoryStore::new();
    backend.seed(pending_path("minor-0.json"), "{not json");
    let store = store(&backend, MalformedPolicy::Skip);

    store.add_pending(&changeset(ChangeType::Patch, "Fix")).unwrap();

    let listed = store.list_pending().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "Fix");
}

// =============================================================================
// CLEARING
// =============================================================================

#[test]
fn test_clear_pending_removes_only_parsed_records() {
    let backend = MemoryStore::new();
    backend.seed(pending_path("notes.txt"), "keep me");
    backend.seed(pending_path("broken.json"), "{not json");
    let store = store(&backend, MalformedPolicy::Skip);

    store.add_pending(&changeset(ChangeType::Patch, "Fix")).unwrap();
    store.add_pending(&changeset(ChangeType::Minor, "Add")).unwrap();
    store.clear_pending().unwrap();

    let remaining = backend.paths();
    assert_eq!(
        remaining,
        vec![pending_path("broken.json"), pending_path("notes.txt")]
    );
    assert!(!store.has_pending().unwrap());
}

// =============================================================================
// RELEASE RECORDS
// =============================================================================

#[test]
fn test_list_releases_ascending_numeric() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);

    for version in ["0.10.0", "1.0.0", "0.9.0"] {
        let version: Version = version.parse().unwrap();
        store
            .write_release(&Release::new(version, vec![changeset(ChangeType::Patch, "Fix")]))
            .unwrap();
    }

    let versions: Vec<String> = store
        .list_releases()
        .unwrap()
        .into_iter()
        .map(|r| r.version.to_string())
        .collect();
    assert_eq!(versions, vec!["0.9.0", "0.10.0", "1.0.0"]);

    let latest = store.latest_release().unwrap().unwrap();
    assert_eq!(latest.version, Version::new(1, 0, 0));
}

#[test]
fn test_latest_release_none_when_empty() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);
    assert!(store.latest_release().unwrap().is_none());
}

#[test]
fn test_write_release_duplicate_version() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);
    let release = Release::new(
        Version::new(1, 0, 0),
        vec![changeset(ChangeType::Major, "Break")],
    );

    store.write_release(&release).unwrap();
    let result = store.write_release(&release);
    assert!(matches!(
        result,
        Err(VersetError::DuplicateVersion(version)) if version == Version::new(1, 0, 0)
    ));
}

#[test]
fn test_release_record_is_never_mutated() {
    let backend = MemoryStore::new();
    let store = store(&backend, MalformedPolicy::Abort);
    let version = Version::new(2, 0, 0);

    store
        .write_release(&Release::new(version, vec![changeset(ChangeType::Major, "Break")]))
        .unwrap();
    let before = backend.paths();

    let _ = store.write_release(&Release::new(version, vec![]));
    assert_eq!(backend.paths(), before);
}

#[test]
fn test_legacy_array_release_format() {
    let backend = MemoryStore::new();
    backend.seed(
        release_path("0.1.0.json"),
        r#"[{"type": "patch", "description": "Fix bug"}]"#,
    );
    let store = store(&backend, MalformedPolicy::Abort);

    let releases = store.list_releases().unwrap();
    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].version, Version::new(0, 1, 0));
    assert!(releases[0].created_at.is_none());
    assert_eq!(releases[0].changes[0].description, "Fix bug");
}

#[test]
fn test_non_version_files_ignored_in_release_listing() {
    let backend = MemoryStore::new();
    backend.seed(release_path("notes.json"), "{not even json");
    let store = store(&backend, MalformedPolicy::Abort);

    assert!(store.list_releases().unwrap().is_empty());
}

// =============================================================================
// LEGACY DIRECTORY LAYOUT
// =============================================================================

#[test]
fn test_legacy_dir_used_when_only_one_present() {
    let backend = MemoryStore::new();
    backend.seed(
        "/repo/.changes/next-release/patch-1.json",
        r#"{"type": "patch", "description": "Legacy fix"}"#,
    );
    let store = ChangesetStore::new(Box::new(backend.clone()), "/repo", MalformedPolicy::Abort);

    assert!(store.is_deprecated());
    assert_eq!(store.dir_name(), ".changes");
    assert_eq!(store.list_pending().unwrap().len(), 1);
}

#[test]
fn test_current_dir_preferred_over_legacy() {
    let backend = MemoryStore::new();
    backend.seed(
        "/repo/.changes/next-release/patch-1.json",
        r#"{"type": "patch", "description": "Legacy fix"}"#,
    );
    backend.seed(
        "/repo/.verset/next-release/minor-1.json",
        r#"{"type": "minor", "description": "New layout"}"#,
    );
    let store = ChangesetStore::new(Box::new(backend.clone()), "/repo", MalformedPolicy::Abort);

    assert!(!store.is_deprecated());
    assert_eq!(store.dir_name(), ".verset");
    let listed = store.list_pending().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "New layout");
}
