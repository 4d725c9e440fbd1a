//! Command implementations

mod add_change;
mod changelog;
mod check_changeset;
mod release;
mod status;
mod version;

pub use add_change::add_change;
pub use changelog::changelog;
pub use check_changeset::check_changeset;
pub use release::release;
pub use status::status;
pub use version::{current_version, next_version};
