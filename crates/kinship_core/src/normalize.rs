//! One-shot validation/repair pass over a freshly loaded family tree.
//!
//! # Responsibility
//! - Repair malformed relationship references and enforce spouse symmetry
//!   before any query runs.
//! - Report every repair as a diagnostic warning, never a failure.
//!
//! # Invariants
//! - Normalization is total: it never fails or panics, however malformed
//!   the relationship lists are.
//! - After normalization every referenced id exists in the person map and
//!   the spouse relation is symmetric.
//! - Normalizing already-normalized repair-clean data is a no-op and emits
//!   no warnings.

use crate::model::person::PersonId;
use crate::model::tree::FamilyTree;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Diagnostic emitted for each repair or anomaly found during
/// [`normalize`]. Informational only; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeWarning {
    /// Stored `id` disagreed with the map key; the key wins.
    IdMismatch { key: PersonId, stored_id: PersonId },
    /// A single comma-joined parent entry was split into separate ids
    /// (spreadsheet-conversion artifact).
    SplitParentIds { person_id: PersonId, raw: String },
    /// A spouse reference pointed at an id absent from the tree and was
    /// dropped.
    MissingSpouse {
        person_id: PersonId,
        missing_id: PersonId,
    },
    /// A parent reference pointed at an id absent from the tree and was
    /// dropped.
    MissingParent {
        person_id: PersonId,
        missing_id: PersonId,
    },
    /// The person appears on their own ancestor chain. Detected, not
    /// repaired.
    ParentCycle { person_id: PersonId },
}

impl Display for NormalizeWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdMismatch { key, stored_id } => {
                write!(f, "person keyed `{key}` carries id `{stored_id}`; key wins")
            }
            Self::SplitParentIds { person_id, raw } => {
                write!(f, "split comma-joined parent ids `{raw}` of `{person_id}`")
            }
            Self::MissingSpouse {
                person_id,
                missing_id,
            } => write!(
                f,
                "dropped spouse reference `{missing_id}` of `{person_id}`: no such person"
            ),
            Self::MissingParent {
                person_id,
                missing_id,
            } => write!(
                f,
                "dropped parent reference `{missing_id}` of `{person_id}`: no such person"
            ),
            Self::ParentCycle { person_id } => {
                write!(f, "`{person_id}` is their own ancestor")
            }
        }
    }
}

impl Error for NormalizeWarning {}

/// Result of [`normalize`]: the repaired tree plus everything that was
/// repaired or flagged along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub tree: FamilyTree,
    pub warnings: Vec<NormalizeWarning>,
}

/// Runs the load-time repair pass and returns the normalized tree.
///
/// Steps, in order:
/// 1. key/id self-consistency (map key overwrites a disagreeing stored id),
/// 2. comma-split repair of single-element `parent_ids`,
/// 3. referential pruning of `spouse_ids` and `parent_ids`,
/// 4. spouse symmetrization (closure over the undirected relation),
/// 5. parent-cycle detection (warn only).
///
/// Pruning runs after the comma split so split ids are themselves pruned.
/// Symmetrization runs after pruning so it only propagates ids known to
/// resolve, which keeps the whole pass idempotent.
pub fn normalize(mut tree: FamilyTree) -> Normalized {
    let mut warnings = Vec::new();

    align_ids_with_keys(&mut tree, &mut warnings);
    split_joined_parent_ids(&mut tree, &mut warnings);
    prune_dangling_references(&mut tree, &mut warnings);
    symmetrize_spouses(&mut tree);
    detect_parent_cycles(&tree, &mut warnings);

    Normalized { tree, warnings }
}

fn align_ids_with_keys(tree: &mut FamilyTree, warnings: &mut Vec<NormalizeWarning>) {
    for (key, person) in &mut tree.persons {
        if person.id != *key {
            warnings.push(NormalizeWarning::IdMismatch {
                key: key.clone(),
                stored_id: std::mem::replace(&mut person.id, key.clone()),
            });
        }
    }
}

fn split_joined_parent_ids(tree: &mut FamilyTree, warnings: &mut Vec<NormalizeWarning>) {
    for person in tree.persons.values_mut() {
        let [single] = person.parent_ids.as_slice() else {
            continue;
        };
        if !single.contains(',') {
            continue;
        }

        let raw = single.clone();
        person.parent_ids = raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();
        warnings.push(NormalizeWarning::SplitParentIds {
            person_id: person.id.clone(),
            raw,
        });
    }
}

fn prune_dangling_references(tree: &mut FamilyTree, warnings: &mut Vec<NormalizeWarning>) {
    let known: BTreeSet<PersonId> = tree.persons.keys().cloned().collect();

    for person in tree.persons.values_mut() {
        let person_id = person.id.clone();
        person.spouse_ids.retain(|id| {
            let keep = known.contains(id);
            if !keep {
                warnings.push(NormalizeWarning::MissingSpouse {
                    person_id: person_id.clone(),
                    missing_id: id.clone(),
                });
            }
            keep
        });
        person.parent_ids.retain(|id| {
            let keep = known.contains(id);
            if !keep {
                warnings.push(NormalizeWarning::MissingParent {
                    person_id: person_id.clone(),
                    missing_id: id.clone(),
                });
            }
            keep
        });
    }
}

fn symmetrize_spouses(tree: &mut FamilyTree) {
    // All referenced ids resolve at this point, so the collected back-edges
    // always target live records.
    let mut back_edges: Vec<(PersonId, PersonId)> = Vec::new();
    for person in tree.persons.values() {
        for spouse_id in &person.spouse_ids {
            let lists_back = tree
                .persons
                .get(spouse_id)
                .is_some_and(|spouse| spouse.spouse_ids.contains(&person.id));
            if !lists_back {
                back_edges.push((spouse_id.clone(), person.id.clone()));
            }
        }
    }

    for (target, missing) in back_edges {
        if let Some(person) = tree.persons.get_mut(&target) {
            if !person.spouse_ids.contains(&missing) {
                person.spouse_ids.push(missing);
            }
        }
    }
}

fn detect_parent_cycles(tree: &FamilyTree, warnings: &mut Vec<NormalizeWarning>) {
    for start in tree.persons.keys() {
        if on_own_ancestor_chain(tree, start) {
            warnings.push(NormalizeWarning::ParentCycle {
                person_id: start.clone(),
            });
        }
    }
}

fn on_own_ancestor_chain(tree: &FamilyTree, start: &str) -> bool {
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut stack: Vec<&str> = tree
        .persons
        .get(start)
        .map(|person| person.parent_ids.iter().map(String::as_str).collect())
        .unwrap_or_default();

    while let Some(current) = stack.pop() {
        if current == start {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(person) = tree.persons.get(current) {
            stack.extend(person.parent_ids.iter().map(String::as_str));
        }
    }
    false
}
