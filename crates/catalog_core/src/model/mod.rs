//! Domain model for the entity-type catalog.
//!
//! # Responsibility
//! - Define the canonical data structures used by core read logic.
//! - Keep one typed record shape shared by storage and presentation.
//!
//! # Invariants
//! - Every record is identified by a stable store-assigned `EntityTypeId`.
//! - Deletion is represented by soft-delete tombstones, not hard delete.

pub mod entity_type;
