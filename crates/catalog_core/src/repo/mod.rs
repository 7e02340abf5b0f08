//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the read-only data access contract for entity types.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories are read-only: entity-type lifecycle belongs to external
//!   collaborators.
//! - Storage failures pass through to callers unmodified; undecodable rows
//!   surface as `MalformedRecord` rather than being dropped or coerced.

pub mod entity_type_repo;
