//! Entity-type domain model.
//!
//! # Responsibility
//! - Define the typed read model for entity-type category records.
//! - Provide soft-delete visibility helpers for read paths.
//!
//! # Invariants
//! - `id` is assigned by the store and never interpreted by core logic.
//! - `deleted_at` is the source of truth for tombstone state: a record is
//!   active iff `deleted_at` is `None`.
//! - Record lifecycle (creation, soft deletion) is owned by collaborators
//!   outside this crate; core only observes persisted state.

use serde::{Deserialize, Serialize};

/// Stable identifier for every entity-type record owned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityTypeId = i64;

/// Canonical read model for one entity-type category record.
///
/// The shape mirrors the store relation: an opaque id, a display name, and
/// the nullable soft-delete timestamp. Consumers that only need names go
/// through the presentation projection instead of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTypeRecord {
    /// Store-assigned stable id.
    pub id: EntityTypeId,
    /// User-facing display name.
    pub name: String,
    /// Soft-delete timestamp in epoch milliseconds. `None` means active.
    pub deleted_at: Option<i64>,
}

impl EntityTypeRecord {
    /// Creates an active record with the given identity and name.
    ///
    /// Used by tests and storage-free fakes; production records are decoded
    /// from persisted rows.
    pub fn new(id: EntityTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deleted_at: None,
        }
    }

    /// Returns whether this record should be considered visible/active.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::EntityTypeRecord;

    #[test]
    fn new_record_is_active() {
        let record = EntityTypeRecord::new(1, "sensor");
        assert!(record.is_active());
        assert_eq!(record.name, "sensor");
    }

    #[test]
    fn tombstoned_record_is_not_active() {
        let mut record = EntityTypeRecord::new(2, "camera");
        record.deleted_at = Some(1_672_531_200_000);
        assert!(!record.is_active());
    }
}
