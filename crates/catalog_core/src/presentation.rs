//! Caller-facing projection of entity-type records.
//!
//! # Responsibility
//! - Reshape raw entity-type records into the public output contract:
//!   an ordered sequence of display names.
//!
//! # Invariants
//! - Pure and reentrant: no storage knowledge, no side effects.
//! - Output preserves input order and length, one name per record.
//! - Ids are deliberately discarded; only names leave this boundary.
//! - The typed input makes a record without a name unrepresentable, so this
//!   module introduces no error kind.

use crate::model::entity_type::EntityTypeRecord;

/// Projects entity-type records to their display names.
///
/// The result has the same length and order as the input and is directly
/// consumable by a JSON-serializing API layer.
pub fn display_names(records: &[EntityTypeRecord]) -> Vec<String> {
    records.iter().map(|record| record.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::display_names;
    use crate::model::entity_type::EntityTypeRecord;

    #[test]
    fn projects_names_in_input_order() {
        let records = vec![
            EntityTypeRecord::new(1, "sensor"),
            EntityTypeRecord::new(3, "beacon"),
        ];
        assert_eq!(display_names(&records), vec!["sensor", "beacon"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(display_names(&[]), Vec::<String>::new());
    }

    #[test]
    fn output_length_matches_input_length() {
        let records: Vec<EntityTypeRecord> = (0..25)
            .map(|id| EntityTypeRecord::new(id, format!("type-{id}")))
            .collect();
        assert_eq!(display_names(&records).len(), records.len());
    }

    #[test]
    fn tombstoned_input_records_are_projected_like_any_other() {
        // Visibility filtering belongs to the data access layer; projection
        // stays one-to-one regardless of tombstone state.
        let mut record = EntityTypeRecord::new(2, "camera");
        record.deleted_at = Some(1_672_531_200_000);
        assert_eq!(display_names(&[record]), vec!["camera"]);
    }
}
