//! Entity-type repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the sole read access to the `entity_types` relation.
//! - Keep SQL details and soft-delete filtering inside the persistence
//!   boundary.
//!
//! # Invariants
//! - Default read paths never return soft-deleted rows.
//! - Read paths reject undecodable persisted state as `MalformedRecord`
//!   instead of masking or coercing it.
//! - The default listing adds no ORDER BY: row order is whatever the store
//!   returns. Callers needing stable order request [`ListOrder::NameAscending`].
//! - No operation writes to the store.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::entity_type::{EntityTypeId, EntityTypeRecord};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTITY_TYPES_TABLE: &str = "entity_types";

const ENTITY_TYPE_SELECT_SQL: &str = "SELECT
    id,
    name,
    deleted_at
FROM entity_types";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity-type read operations.
///
/// `Db` is the storage failure passed through from the underlying client:
/// no retry, no recovery, no message rewriting.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap failure, propagated unchanged.
    Db(DbError),
    /// Persisted row cannot be decoded into the typed read model.
    MalformedRecord(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MalformedRecord(message) => {
                write!(f, "malformed entity type record: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "entity type repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "entity type repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "entity type repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MalformedRecord(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Row ordering applied to list reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// No ORDER BY clause; rows arrive in store-default order.
    #[default]
    StoreDefault,
    /// Deterministic `name COLLATE NOCASE ASC, id ASC`.
    NameAscending,
}

/// Query options for listing entity types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTypeListQuery {
    /// Include soft-deleted rows in the result.
    pub include_deleted: bool,
    /// Ordering requested by the caller.
    pub order: ListOrder,
}

/// Repository interface for entity-type read operations.
pub trait EntityTypeRepository {
    /// Lists active entity types in store-default order.
    fn list_active_entity_types(&self) -> RepoResult<Vec<EntityTypeRecord>>;
    /// Lists entity types using visibility and ordering options.
    fn list_entity_types(
        &self,
        query: &EntityTypeListQuery,
    ) -> RepoResult<Vec<EntityTypeRecord>>;
    /// Gets one entity type by id with optional deleted-row visibility.
    fn get_entity_type(
        &self,
        id: EntityTypeId,
        include_deleted: bool,
    ) -> RepoResult<Option<EntityTypeRecord>>;
}

/// SQLite-backed entity-type repository over an injected connection.
pub struct SqliteEntityTypeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntityTypeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EntityTypeRepository for SqliteEntityTypeRepository<'_> {
    fn list_active_entity_types(&self) -> RepoResult<Vec<EntityTypeRecord>> {
        self.list_entity_types(&EntityTypeListQuery::default())
    }

    fn list_entity_types(
        &self,
        query: &EntityTypeListQuery,
    ) -> RepoResult<Vec<EntityTypeRecord>> {
        let mut sql = String::from(ENTITY_TYPE_SELECT_SQL);

        if !query.include_deleted {
            sql.push_str(" WHERE deleted_at IS NULL");
        }

        match query.order {
            ListOrder::StoreDefault => {}
            ListOrder::NameAscending => {
                sql.push_str(" ORDER BY name COLLATE NOCASE ASC, id ASC");
            }
        }
        sql.push(';');

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_entity_type_row(row)?);
        }

        Ok(records)
    }

    fn get_entity_type(
        &self,
        id: EntityTypeId,
        include_deleted: bool,
    ) -> RepoResult<Option<EntityTypeRecord>> {
        let sql = if include_deleted {
            format!("{ENTITY_TYPE_SELECT_SQL} WHERE id = ?1;")
        } else {
            format!("{ENTITY_TYPE_SELECT_SQL} WHERE id = ?1 AND deleted_at IS NULL;")
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entity_type_row(row)?));
        }

        Ok(None)
    }
}

fn parse_entity_type_row(row: &Row<'_>) -> RepoResult<EntityTypeRecord> {
    let id: EntityTypeId = match row.get_ref("id")? {
        ValueRef::Integer(value) => value,
        other => {
            return Err(RepoError::MalformedRecord(format!(
                "expected integer in entity_types.id, got {}",
                other.data_type()
            )));
        }
    };

    let name = match row.get_ref("name")? {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map_err(|_| {
                RepoError::MalformedRecord("non-utf8 text in entity_types.name".to_string())
            })?
            .to_string(),
        other => {
            return Err(RepoError::MalformedRecord(format!(
                "expected text in entity_types.name, got {}",
                other.data_type()
            )));
        }
    };

    let deleted_at = match row.get_ref("deleted_at")? {
        ValueRef::Null => None,
        ValueRef::Integer(value) => Some(value),
        other => {
            return Err(RepoError::MalformedRecord(format!(
                "expected integer or null in entity_types.deleted_at, got {}",
                other.data_type()
            )));
        }
    };

    Ok(EntityTypeRecord {
        id,
        name,
        deleted_at,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, ENTITY_TYPES_TABLE)? {
        return Err(RepoError::MissingRequiredTable(ENTITY_TYPES_TABLE));
    }

    for column in ["id", "name", "deleted_at"] {
        if !table_has_column(conn, ENTITY_TYPES_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: ENTITY_TYPES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
