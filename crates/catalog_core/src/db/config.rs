//! Injected store configuration.
//!
//! # Responsibility
//! - Describe where the catalog store lives and how the host deploys it.
//! - Keep every storage knob explicit so the host service constructs and
//!   injects configuration instead of core reading the environment.
//!
//! # Invariants
//! - Constructing a config has no side effects; only [`super::open_store`]
//!   touches the filesystem.
//! - `is_live` is recorded in bootstrap diagnostics and gates no behavior.

use std::path::PathBuf;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Private in-memory database. Used by tests and smoke probes.
    InMemory,
    /// Database file on disk.
    File(PathBuf),
}

/// Explicit store configuration built by the surrounding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Target database location.
    pub location: StoreLocation,
    /// Deployment-mode flag forwarded by the host service.
    ///
    /// Carried for diagnostics only: the value is logged when the store
    /// opens, and no core logic branches on it.
    pub is_live: bool,
}

impl StoreConfig {
    /// Creates a config pointing at a database file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            is_live: false,
        }
    }

    /// Creates a config for a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::InMemory,
            is_live: false,
        }
    }
}
