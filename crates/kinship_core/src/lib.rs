//! Core relationship-graph logic for the family tree explorer.
//! This crate is the single source of truth for graph invariants.
//!
//! Raw data flows one direction: JSON dataset -> [`normalize`] ->
//! [`FamilyTree`] -> query functions -> presentation. The tree is read-only
//! after normalization; UI state (current node, search text) lives with the
//! caller.

pub mod display;
pub mod loader;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod query;
pub mod search;

pub use display::{is_right_to_left, resolve_display_name, UNKNOWN_NAME};
pub use loader::{load_tree_from_path, load_tree_from_str, LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactDirectory, ContactInfo};
pub use model::person::{Gender, Grave, LifeStatus, Person, PersonId};
pub use model::tree::FamilyTree;
pub use normalize::{normalize, Normalized, NormalizeWarning};
pub use query::{
    children_of, children_of_couple, compare_by_sibling_order, shared_parent_count, siblings_of,
    spouses_of,
};
pub use search::{search_match, search_persons};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
