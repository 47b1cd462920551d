//! Domain model for the family relationship graph.
//!
//! # Responsibility
//! - Define the canonical person record and the keyed graph aggregate.
//! - Define the optional contact directory joined by presentation code.
//!
//! # Invariants
//! - Every person is identified by a stable string `PersonId`.
//! - Relationship lists reference ids, never embedded records.

pub mod contact;
pub mod person;
pub mod tree;
