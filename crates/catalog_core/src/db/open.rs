//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open a connection from injected [`StoreConfig`].
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and a bounded busy timeout.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::{DbResult, StoreConfig, StoreLocation};
use log::{error, info};
use rusqlite::Connection;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the catalog store described by `config` and applies all pending
/// migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `db_open` logging events with mode, duration and status.
pub fn open_store(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = location_label(&config.location);
    info!(
        "event=db_open module=db status=start mode={mode} is_live={}",
        config.is_live
    );

    let mut conn = match connect(&config.location) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} is_live={} duration_ms={} error_code=db_open_failed error={}",
                config.is_live,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    if let Err(err) = bootstrap_connection(&mut conn) {
        error!(
            "event=db_open module=db status=error mode={mode} is_live={} duration_ms={} error_code=db_bootstrap_failed error={}",
            config.is_live,
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    info!(
        "event=db_open module=db status=ok mode={mode} is_live={} duration_ms={}",
        config.is_live,
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn connect(location: &StoreLocation) -> rusqlite::Result<Connection> {
    match location {
        StoreLocation::InMemory => Connection::open_in_memory(),
        StoreLocation::File(path) => Connection::open(path),
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}

fn location_label(location: &StoreLocation) -> &'static str {
    match location {
        StoreLocation::InMemory => "memory",
        StoreLocation::File(_) => "file",
    }
}
