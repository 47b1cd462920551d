//! Person text search.
//!
//! # Responsibility
//! - Define the single match predicate behind every search box, so "what
//!   counts as a match" is decided in exactly one place.
//! - Provide a capped, deterministically ordered suggestion query for
//!   type-ahead lists.
//!
//! # Invariants
//! - Matching is case-insensitive substring matching.
//! - A blank query means "no filter applied" and matches every person.

use crate::display::resolve_display_name;
use crate::model::contact::ContactDirectory;
use crate::model::person::Person;
use crate::model::tree::FamilyTree;
use crate::query::compare_by_sibling_order;

/// Returns whether `person` matches `query`.
///
/// The haystack is the resolved display name, address, grave
/// city/cemetery/section/location, and, when a [`ContactDirectory`] is
/// supplied, the person's phone and email. Blank (or whitespace-only)
/// queries always match.
pub fn search_match(person: &Person, query: &str, contacts: Option<&ContactDirectory>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contact = contacts.and_then(|directory| directory.lookup(&person.id));
    let resolved = resolve_display_name(Some(person));
    let grave = person.grave.as_ref();

    let haystack = [
        Some(resolved.as_str()),
        person.address.as_deref(),
        grave.and_then(|g| g.city.as_deref()),
        grave.and_then(|g| g.cemetery.as_deref()),
        grave.and_then(|g| g.section.as_deref()),
        grave.and_then(|g| g.location.as_deref()),
        contact.and_then(|c| c.phone.as_deref()),
        contact.and_then(|c| c.email.as_deref()),
    ];

    let matched = haystack
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle));
    matched
}

/// Matches `query` against every person in the tree and returns up to
/// `limit` hits in sibling order.
///
/// Unlike [`search_match`], a blank query returns no hits here: suggestion
/// dropdowns show nothing until the user types.
pub fn search_persons<'a>(
    tree: &'a FamilyTree,
    query: &str,
    contacts: Option<&ContactDirectory>,
    limit: usize,
) -> Vec<&'a Person> {
    if query.trim().is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<&Person> = tree
        .persons
        .values()
        .filter(|person| search_match(person, query, contacts))
        .collect();
    hits.sort_by(|a, b| compare_by_sibling_order(a, b));
    hits.truncate(limit);
    hits
}
