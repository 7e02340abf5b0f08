//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `catalog_core` linkage.
//! - Exercise the full read seam (store -> repository -> names) end to end.
//! - Keep output deterministic for quick local sanity checks.

use catalog_core::db::{open_store, StoreConfig};
use catalog_core::{EntityTypeService, SqliteEntityTypeRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("catalog_core ping={}", catalog_core::ping());
    println!("catalog_core version={}", catalog_core::core_version());

    // Why: a private in-memory store keeps the probe deterministic while
    // still driving the real query and projection paths.
    let conn = open_store(&StoreConfig::in_memory())?;

    // Record lifecycle belongs to collaborators outside the core; the probe
    // plays that role here.
    conn.execute_batch(
        "INSERT INTO entity_types (id, name, deleted_at) VALUES
            (1, 'sensor', NULL),
            (2, 'camera', 1672531200000),
            (3, 'beacon', NULL);",
    )?;

    let repo = SqliteEntityTypeRepository::try_new(&conn)?;
    let service = EntityTypeService::new(repo);
    for name in service.list_active_display_names()? {
        println!("entity_type name={name}");
    }

    Ok(())
}
