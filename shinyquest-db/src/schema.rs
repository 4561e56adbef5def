//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a tracker database at the given path.
///
/// Fatal at startup if the storage medium is unreadable or unwritable;
/// the error propagates, no retry.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version < CURRENT_VERSION {
        migrate(&conn, version)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run migrations from `from_version` up to `CURRENT_VERSION`.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }

    let mut version = from_version;
    while version < CURRENT_VERSION {
        // No migrations yet; add match arms here as the schema evolves.
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Registered user accounts
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password_digest TEXT NOT NULL,
    bio TEXT NOT NULL DEFAULT ''
);

-- Hunts owned by registered accounts
CREATE TABLE IF NOT EXISTS hunts (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    creature TEXT NOT NULL,
    game TEXT NOT NULL,
    method TEXT NOT NULL,
    counter INTEGER NOT NULL DEFAULT 0,
    success INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_hunts_owner ON hunts(user_id);

-- Hunts owned by ephemeral guest sessions
CREATE TABLE IF NOT EXISTS guest_hunts (
    id INTEGER PRIMARY KEY,
    guest_id TEXT NOT NULL,
    creature TEXT NOT NULL,
    game TEXT NOT NULL,
    method TEXT NOT NULL,
    counter INTEGER NOT NULL DEFAULT 0,
    success INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_guest_hunts_owner ON guest_hunts(guest_id);

-- Derived living dex: one entry per (identity, creature)
CREATE TABLE IF NOT EXISTS living_dex (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    creature TEXT NOT NULL,
    game TEXT NOT NULL,
    UNIQUE(user_id, creature)
);

-- Tombstones for manually removed dex entries; sync skips these
CREATE TABLE IF NOT EXISTS dex_removals (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    creature TEXT NOT NULL,
    UNIQUE(user_id, creature)
);
"#;
