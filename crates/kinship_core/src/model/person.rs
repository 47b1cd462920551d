//! Person record schema.
//!
//! # Responsibility
//! - Define the single-individual record and its biographical attributes.
//! - Match the wire shape of exported family datasets field for field.
//!
//! # Invariants
//! - `id` is the stable key used by all cross-references.
//! - Absent relationship lists deserialize to empty lists; queries never
//!   distinguish the two.
//! - `spouse_ids` symmetry and referential integrity are established by the
//!   normalizer, not assumed from raw input.

use serde::{Deserialize, Serialize};

/// Stable identifier for a person, used for all cross-references.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are caller-supplied slugs (for example `"khadim-hussain"`), not
/// generated values.
pub type PersonId = String;

/// Cosmetic gender marker.
///
/// Serialized as single letters to match the dataset wire format. No core
/// logic branches on this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U")]
    Unknown,
}

/// Whether a person is known to be alive or deceased.
///
/// Governs which attribute set is meaningful (address for the living, grave
/// details for the deceased) but both may be present; that is a dataset
/// convention, not an enforced invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    Alive,
    Deceased,
    #[default]
    Unknown,
}

impl LifeStatus {
    /// Fixed badge label used by every view that renders a status chip.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Deceased => "Deceased",
            Self::Unknown => "Unknown",
        }
    }
}

/// Structured burial record, typically present only for the deceased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grave {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cemetery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// GPS reference or row/plot identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One individual in the family graph.
///
/// Dates are uninterpreted strings; no date arithmetic happens anywhere in
/// core. Children point at parents via `parent_ids`; there is no forward
/// children list, children are found by reverse query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Takes precedence over first/last name for rendering; supports
    /// bilingual labels such as `"Khadim Hussain خادم حسین"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub life_status: LifeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    /// Current or last known residence, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grave: Option<Grave>,
    /// Marriage partners, ordered. Symmetric after normalization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spouse_ids: Vec<PersonId>,
    /// Zero, one, or two parent ids. Usually `[father, mother]` when known.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_ids: Vec<PersonId>,
    /// Birth-order rank among siblings of the same couple; sort tiebreaker
    /// only, never an identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u32>,
}

impl Person {
    /// Creates a person with the given id and all optional fields empty.
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns whether this person is recorded as deceased.
    pub fn is_deceased(&self) -> bool {
        self.life_status == LifeStatus::Deceased
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, LifeStatus, Person};

    #[test]
    fn new_person_has_empty_relationships() {
        let person = Person::new("ali");
        assert_eq!(person.id, "ali");
        assert_eq!(person.gender, Gender::Unknown);
        assert_eq!(person.life_status, LifeStatus::Unknown);
        assert!(person.spouse_ids.is_empty());
        assert!(person.parent_ids.is_empty());
        assert_eq!(person.order_id, None);
    }

    #[test]
    fn badge_labels_are_stable() {
        assert_eq!(LifeStatus::Alive.badge_label(), "Alive");
        assert_eq!(LifeStatus::Deceased.badge_label(), "Deceased");
        assert_eq!(LifeStatus::Unknown.badge_label(), "Unknown");
    }
}
