//! Create a new changeset file

use std::collections::BTreeMap;
use std::path::Path;

use verset::models::{ChangeType, Changeset};
use verset::output::{AddChangeResult, OutputMode};
use verset::releaser::Releaser;

/// Create a pending changeset record in the working directory
pub fn add_change(
    path: &Path,
    change_type: &str,
    description: &str,
    attributes: &[String],
    mode: OutputMode,
) -> anyhow::Result<()> {
    let change_type: ChangeType = change_type.parse()?;
    if description.trim().is_empty() {
        anyhow::bail!("description must not be empty");
    }

    let mut parsed = BTreeMap::new();
    for attribute in attributes {
        let Some((key, value)) = attribute.split_once('=') else {
            anyhow::bail!("invalid attribute '{attribute}', expected key=value");
        };
        parsed.insert(
            key.to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }

    let changeset = Changeset {
        change_type,
        description: description.to_string(),
        attributes: parsed,
    };
    let record = Releaser::open(path).add_change(&changeset)?;

    AddChangeResult {
        path: record.display().to_string(),
    }
    .render(mode);
    Ok(())
}
