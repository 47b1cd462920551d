//! Relationship queries over a normalized family tree.
//!
//! # Responsibility
//! - Answer spouses-of, children-of, children-of-a-couple, and siblings-of
//!   as pure reads over the tree.
//! - Define the one sibling ordering used everywhere person lists render.
//!
//! # Invariants
//! - Every function is total over normalized input: absent relationship
//!   lists behave exactly like empty lists, and unresolved ids degrade to
//!   empty results instead of panicking.
//! - Returned vectors are fresh; callers never alias tree-internal storage.
//! - Children are found by reverse scan over `parent_ids`; the dataset is
//!   small (low hundreds), so no index is precomputed.

use crate::display::resolve_display_name;
use crate::model::person::Person;
use crate::model::tree::FamilyTree;
use std::cmp::Ordering;

/// Resolves a person's spouses in `spouse_ids` order.
///
/// Ids that fail to resolve are silently dropped; the normalizer should
/// have removed them already, but the query layer does not trust that
/// blindly.
pub fn spouses_of<'a>(tree: &'a FamilyTree, person: &Person) -> Vec<&'a Person> {
    person
        .spouse_ids
        .iter()
        .filter_map(|id| tree.persons.get(id))
        .collect()
}

/// All children of a person across every spouse, in sibling order.
pub fn children_of<'a>(tree: &'a FamilyTree, person: &Person) -> Vec<&'a Person> {
    let mut children: Vec<&Person> = tree
        .persons
        .values()
        .filter(|candidate| candidate.parent_ids.iter().any(|id| *id == person.id))
        .collect();
    children.sort_by(|a, b| compare_by_sibling_order(a, b));
    children
}

/// Children of one specific couple: persons listing both ids among their
/// parents, in sibling order.
///
/// This is how the explorer disambiguates child sets when a parent has
/// several spouses.
pub fn children_of_couple<'a>(tree: &'a FamilyTree, id_a: &str, id_b: &str) -> Vec<&'a Person> {
    let mut children: Vec<&Person> = tree
        .persons
        .values()
        .filter(|candidate| {
            candidate.parent_ids.iter().any(|id| id == id_a)
                && candidate.parent_ids.iter().any(|id| id == id_b)
        })
        .collect();
    children.sort_by(|a, b| compare_by_sibling_order(a, b));
    children
}

/// Persons other than `person` who share at least one parent with them, in
/// sibling order.
///
/// Deliberately loose: half-siblings who share a single parent are included
/// and indistinguishable from full siblings here. Callers who need the
/// stricter relation can filter on [`shared_parent_count`].
pub fn siblings_of<'a>(tree: &'a FamilyTree, person: &Person) -> Vec<&'a Person> {
    let mut siblings: Vec<&Person> = tree
        .persons
        .values()
        .filter(|candidate| candidate.id != person.id)
        .filter(|candidate| shared_parent_count(candidate, person) > 0)
        .collect();
    siblings.sort_by(|a, b| compare_by_sibling_order(a, b));
    siblings
}

/// Number of parent ids the two persons have in common (0, 1, or 2 for
/// well-formed records).
pub fn shared_parent_count(a: &Person, b: &Person) -> usize {
    a.parent_ids
        .iter()
        .filter(|id| b.parent_ids.contains(id))
        .count()
}

/// The one ordering applied wherever sibling lists are presented: birth
/// order first (`order_id` ascending, absent last), resolved display name
/// second (case-insensitive).
///
/// Birth order becomes the default narrative order, degrading to
/// alphabetical when unknown.
pub fn compare_by_sibling_order(a: &Person, b: &Person) -> Ordering {
    let rank_a = a.order_id.unwrap_or(u32::MAX);
    let rank_b = b.order_id.unwrap_or(u32::MAX);
    rank_a.cmp(&rank_b).then_with(|| {
        resolve_display_name(Some(a))
            .to_lowercase()
            .cmp(&resolve_display_name(Some(b)).to_lowercase())
    })
}
