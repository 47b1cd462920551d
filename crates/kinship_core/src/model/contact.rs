//! Contact directory joined against person ids by phone-book views.
//!
//! # Responsibility
//! - Hold phone/email per person id, maintained independently of the tree.
//!
//! # Invariants
//! - A missing entry means "no contact info available", never an error.

use crate::model::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phone and email for one person. Both fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Secondary id-keyed lookup for contact details.
///
/// Kept separate from [`crate::model::person::Person`] so the relationship
/// dataset and the contact list can be curated independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactDirectory {
    entries: BTreeMap<PersonId, ContactInfo>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records contact info for a person id, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<PersonId>, info: ContactInfo) {
        self.entries.insert(id.into(), info);
    }

    /// Looks up contact info by person id.
    pub fn lookup(&self, id: &str) -> Option<&ContactInfo> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
