//! Tests for the changeset model

use verset::error::VersetError;
use verset::models::{ChangeType, Changeset, sort_changes};

use crate::common::fixtures::ChangesetBuilder;

// =============================================================================
// CHANGE TYPE
// =============================================================================

#[test]
fn test_change_type_from_str() {
    assert_eq!("major".parse::<ChangeType>().unwrap(), ChangeType::Major);
    assert_eq!("MINOR".parse::<ChangeType>().unwrap(), ChangeType::Minor);
    assert_eq!("Patch".parse::<ChangeType>().unwrap(), ChangeType::Patch);
}

#[test]
fn test_change_type_from_str_invalid() {
    let result = "huge".parse::<ChangeType>();
    assert!(matches!(result, Err(VersetError::InvalidChangeType(_))));
}

#[test]
fn test_change_type_display() {
    assert_eq!(ChangeType::Major.to_string(), "major");
    assert_eq!(ChangeType::Minor.to_string(), "minor");
    assert_eq!(ChangeType::Patch.to_string(), "patch");
}

#[test]
fn test_change_type_severity_order() {
    assert!(ChangeType::Major > ChangeType::Minor);
    assert!(ChangeType::Minor > ChangeType::Patch);
}

// =============================================================================
// CHANGESET
// =============================================================================

#[test]
fn test_serde_uses_type_field() {
    let changeset = Changeset::new(ChangeType::Minor, "Add feature");
    let json = serde_json::to_value(&changeset).unwrap();
    assert_eq!(json["type"], "minor");
    assert_eq!(json["description"], "Add feature");
}

#[test]
fn test_custom_attributes_pass_through() {
    let json = r#"{"type": "patch", "description": "Fix bug", "issue": "GH-42", "author": "sam"}"#;
    let changeset: Changeset = serde_json::from_str(json).unwrap();
    assert_eq!(changeset.change_type, ChangeType::Patch);
    assert_eq!(changeset.attributes["issue"], "GH-42");
    assert_eq!(changeset.attributes["author"], "sam");

    // Re-emitted verbatim
    let emitted = serde_json::to_value(&changeset).unwrap();
    assert_eq!(emitted["issue"], "GH-42");
    assert_eq!(emitted["author"], "sam");
}

#[test]
fn test_missing_type_fails_to_parse() {
    let result = serde_json::from_str::<Changeset>(r#"{"description": "Fix bug"}"#);
    assert!(result.is_err());
}

#[test]
fn test_sort_changes_severity_then_description() {
    let mut changes = vec![
        ChangesetBuilder::new()
            .change_type(ChangeType::Patch)
            .description("B fix")
            .build(),
        ChangesetBuilder::new()
            .change_type(ChangeType::Major)
            .description("Break everything")
            .build(),
        ChangesetBuilder::new()
            .change_type(ChangeType::Patch)
            .description("A fix")
            .build(),
        ChangesetBuilder::new()
            .change_type(ChangeType::Minor)
            .description("Add feature")
            .build(),
    ];
    sort_changes(&mut changes);

    let order: Vec<(ChangeType, &str)> = changes
        .iter()
        .map(|c| (c.change_type, c.description.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (ChangeType::Major, "Break everything"),
            (ChangeType::Minor, "Add feature"),
            (ChangeType::Patch, "A fix"),
            (ChangeType::Patch, "B fix"),
        ]
    );
}
