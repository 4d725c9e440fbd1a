//! Changelog rendering
//!
//! The core hands the renderer the ordered release history as `releases`,
//! newest version first; everything else is template territory. Templates
//! use tera syntax and see each release's `version`, `created_at` and
//! `changes` (with `type`, `description` and any custom attributes).

use tera::{Context, Tera};

use crate::models::Release;

/// Template applied when the user supplies none
pub const DEFAULT_TEMPLATE: &str = "\
# Changelog
Note: version releases in the 0.x.y range may introduce breaking changes.
{% for release in releases %}
## {{ release.version }}

{% for change in release.changes %}- {{ change.type }}: {{ change.description }}
{% endfor %}{% endfor %}";

/// Render `releases` (ascending by version) through `template`, newest
/// version first
pub fn render(releases: &[Release], template: Option<&str>) -> Result<String, tera::Error> {
    let ordered: Vec<&Release> = releases.iter().rev().collect();
    let mut context = Context::new();
    context.insert("releases", &ordered);
    Tera::one_off(template.unwrap_or(DEFAULT_TEMPLATE), &context, false)
}
