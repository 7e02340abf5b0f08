//! Entity-type use-case service.
//!
//! # Responsibility
//! - Provide stable read entry points for core callers.
//! - Compose data access and presentation in sequence for listing names.
//!
//! # Invariants
//! - Service APIs never bypass repository read contracts.
//! - The service layer remains storage-agnostic; it holds only the
//!   repository trait.

use crate::model::entity_type::{EntityTypeId, EntityTypeRecord};
use crate::presentation::display_names;
use crate::repo::entity_type_repo::{EntityTypeListQuery, EntityTypeRepository, RepoResult};

/// Use-case service wrapper for entity-type reads.
pub struct EntityTypeService<R: EntityTypeRepository> {
    repo: R,
}

impl<R: EntityTypeRepository> EntityTypeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists active entity types in store-default order.
    pub fn list_active_entity_types(&self) -> RepoResult<Vec<EntityTypeRecord>> {
        self.repo.list_active_entity_types()
    }

    /// Lists entity types using visibility and ordering options.
    pub fn list_entity_types(
        &self,
        query: &EntityTypeListQuery,
    ) -> RepoResult<Vec<EntityTypeRecord>> {
        self.repo.list_entity_types(query)
    }

    /// Gets one entity type by id with optional deleted-row visibility.
    pub fn get_entity_type(
        &self,
        id: EntityTypeId,
        include_deleted: bool,
    ) -> RepoResult<Option<EntityTypeRecord>> {
        self.repo.get_entity_type(id, include_deleted)
    }

    /// Lists display names of active entity types.
    ///
    /// # Contract
    /// - Reads active records, then projects names in the same order.
    /// - Empty store yields an empty list, not an error.
    pub fn list_active_display_names(&self) -> RepoResult<Vec<String>> {
        let records = self.repo.list_active_entity_types()?;
        Ok(display_names(&records))
    }
}
