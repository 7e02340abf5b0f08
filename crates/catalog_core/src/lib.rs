//! Core read logic for the entity-type catalog.
//! This crate is the single source of truth for the catalog read contracts.

pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity_type::{EntityTypeId, EntityTypeRecord};
pub use presentation::display_names;
pub use repo::entity_type_repo::{
    EntityTypeListQuery, EntityTypeRepository, ListOrder, RepoError, RepoResult,
    SqliteEntityTypeRepository,
};
pub use service::entity_type_service::EntityTypeService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
