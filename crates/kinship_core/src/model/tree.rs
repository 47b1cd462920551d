//! Family graph aggregate.
//!
//! # Responsibility
//! - Hold the id-to-person mapping plus the conventional root id.
//!
//! # Invariants
//! - `persons` is a `BTreeMap` so scan queries iterate in a deterministic
//!   order.
//! - After normalization the tree is treated as immutable for the session;
//!   queries only read.

use crate::model::person::{Person, PersonId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The aggregate the rest of the system operates on: a designated root id
/// plus the keyed person records.
///
/// Constructed once from raw data, normalized once, then read-only. Edits,
/// if ever supported, should produce a new tree and re-normalize rather than
/// mutate in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTree {
    /// Conventional starting point for tree display.
    pub root_id: PersonId,
    pub persons: BTreeMap<PersonId, Person>,
}

impl FamilyTree {
    /// Creates an empty tree with the given root id.
    pub fn new(root_id: impl Into<PersonId>) -> Self {
        Self {
            root_id: root_id.into(),
            persons: BTreeMap::new(),
        }
    }

    /// Inserts a person under its own id, replacing any previous record with
    /// that id.
    pub fn insert(&mut self, person: Person) {
        self.persons.insert(person.id.clone(), person);
    }

    /// Looks up a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.get(id)
    }

    /// Returns the root person, when the root id resolves.
    pub fn root(&self) -> Option<&Person> {
        self.persons.get(&self.root_id)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
