//! Tests for changelog rendering

use verset::changelog::{DEFAULT_TEMPLATE, render};
use verset::models::{ChangeType, Release, Version};

use crate::common::fixtures::{ChangesetBuilder, changeset};

fn history() -> Vec<Release> {
    // Ascending by version, as the release manager hands it over
    vec![
        Release {
            version: Version::new(1, 0, 0),
            created_at: Some("2025-01-01T09:30:00Z".to_string()),
            changes: vec![changeset(ChangeType::Major, "Initial release")],
        },
        Release {
            version: Version::new(1, 1, 0),
            created_at: Some("2025-02-01T09:30:00Z".to_string()),
            changes: vec![
                changeset(ChangeType::Minor, "Add feature"),
                changeset(ChangeType::Patch, "Fix bug"),
            ],
        },
    ]
}

#[test]
fn test_default_template_newest_first() {
    let output = render(&history(), None).unwrap();
    assert_eq!(
        output,
        "# Changelog\n\
         Note: version releases in the 0.x.y range may introduce breaking changes.\n\
         \n\
         ## 1.1.0\n\
         \n\
         - minor: Add feature\n\
         - patch: Fix bug\n\
         \n\
         ## 1.0.0\n\
         \n\
         - major: Initial release\n"
    );
}

#[test]
fn test_default_template_empty_history() {
    let output = render(&[], None).unwrap();
    assert_eq!(
        output,
        "# Changelog\n\
         Note: version releases in the 0.x.y range may introduce breaking changes.\n"
    );
}

#[test]
fn test_custom_template() {
    let template = "{% for release in releases %}v{{ release.version }} ({{ release.created_at }})\n{% endfor %}";
    let output = render(&history(), Some(template)).unwrap();
    assert_eq!(
        output,
        "v1.1.0 (2025-02-01T09:30:00Z)\nv1.0.0 (2025-01-01T09:30:00Z)\n"
    );
}

#[test]
fn test_custom_attributes_visible_to_templates() {
    let releases = vec![Release {
        version: Version::new(0, 1, 0),
        created_at: None,
        changes: vec![
            ChangesetBuilder::new()
                .change_type(ChangeType::Minor)
                .description("Add feature")
                .attribute("issue", "GH-42")
                .build(),
        ],
    }];
    let template =
        "{% for release in releases %}{% for change in release.changes %}{{ change.issue }}{% endfor %}{% endfor %}";
    assert_eq!(render(&releases, Some(template)).unwrap(), "GH-42");
}

#[test]
fn test_default_template_constant_is_used() {
    let via_none = render(&history(), None).unwrap();
    let via_constant = render(&history(), Some(DEFAULT_TEMPLATE)).unwrap();
    assert_eq!(via_none, via_constant);
}
