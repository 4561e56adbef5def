//! CRUD operations over accounts and the two hunt partitions.

use rusqlite::{params, Connection};
use shinyquest_core::{Account, Hunt, SessionIdentity};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Duplicate {field}: already registered")]
    DuplicateKey { field: &'static str },
}

/// Fallback for hunt fields the user left blank.
pub const UNKNOWN: &str = "Unknown";

/// The physical table and owner column for an identity's hunts.
///
/// This is the single place partition selection happens; everything else
/// matches on `SessionIdentity` indirectly through here.
pub(crate) fn hunt_partition(identity: &SessionIdentity) -> (&'static str, &'static str) {
    match identity {
        SessionIdentity::Guest(_) => ("guest_hunts", "guest_id"),
        SessionIdentity::Registered(_) => ("hunts", "user_id"),
    }
}

// ── Account Operations ──────────────────────────────────────────────────────

/// Register a new account. Returns the generated row id.
///
/// Fails with `DuplicateKey` if the username or email is already taken;
/// the store is left unchanged.
pub fn create_account(
    conn: &Connection,
    username: &str,
    email: &str,
    password_digest: &str,
) -> Result<i64, OperationError> {
    let result = conn.execute(
        "INSERT INTO accounts (username, email, password_digest, bio) VALUES (?1, ?2, ?3, '')",
        params![username, email, password_digest],
    );
    match result {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) if is_unique_violation(&e) => {
            let field = if format!("{e}").contains("email") {
                "email"
            } else {
                "username"
            };
            Err(OperationError::DuplicateKey { field })
        }
        Err(e) => Err(e.into()),
    }
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Look up an account by exact username + password digest match.
///
/// Any mismatch returns `None`; no distinction between unknown user and
/// wrong password.
pub fn authenticate(
    conn: &Connection,
    username: &str,
    password_digest: &str,
) -> Result<Option<Account>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, username, email, password_digest, bio
         FROM accounts WHERE username = ?1 AND password_digest = ?2",
    )?;
    let result = stmt.query_row(params![username, password_digest], row_to_account);
    match result {
        Ok(account) => Ok(Some(account)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Find an account by username (profile view).
pub fn find_account(conn: &Connection, username: &str) -> Result<Option<Account>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, username, email, password_digest, bio FROM accounts WHERE username = ?1",
    )?;
    let result = stmt.query_row(params![username], row_to_account);
    match result {
        Ok(account) => Ok(Some(account)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Replace an account's bio text.
pub fn update_bio(conn: &Connection, username: &str, bio: &str) -> Result<(), OperationError> {
    conn.execute(
        "UPDATE accounts SET bio = ?2 WHERE username = ?1",
        params![username, bio],
    )?;
    Ok(())
}

// ── Hunt Operations ─────────────────────────────────────────────────────────

/// Log a new hunt for the identity: counter 0, not yet successful.
///
/// `game` and `method` default to "Unknown" when unspecified. Returns the
/// generated row id in the identity's partition.
pub fn insert_hunt(
    conn: &Connection,
    identity: &SessionIdentity,
    creature: &str,
    game: Option<&str>,
    method: Option<&str>,
) -> Result<i64, OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    conn.execute(
        &format!(
            "INSERT INTO {table} ({owner_col}, creature, game, method, counter, success)
             VALUES (?1, ?2, ?3, ?4, 0, 0)"
        ),
        params![
            identity.as_str(),
            creature,
            game.unwrap_or(UNKNOWN),
            method.unwrap_or(UNKNOWN),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Mark the first not-yet-successful hunt of `creature` as successful,
/// counting the winning attempt (success = 1, counter + 1).
///
/// Returns `false` if no eligible row exists — a benign no-op, not an
/// error. A second call for the same creature does nothing unless a new
/// unsuccessful hunt was logged in between.
pub fn mark_successful(
    conn: &Connection,
    identity: &SessionIdentity,
    creature: &str,
) -> Result<bool, OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    let changed = conn.execute(
        &format!(
            "UPDATE {table} SET success = 1, counter = counter + 1
             WHERE id = (
                 SELECT MIN(id) FROM {table}
                 WHERE {owner_col} = ?1 AND creature = ?2 AND success = 0
             )"
        ),
        params![identity.as_str(), creature],
    )?;
    Ok(changed > 0)
}

/// Bump the attempt counter on one of the identity's unsuccessful hunts.
///
/// Returns `false` if the row doesn't exist, belongs to someone else, or
/// is already successful.
pub fn increment_counter(
    conn: &Connection,
    identity: &SessionIdentity,
    hunt_id: i64,
) -> Result<bool, OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    let changed = conn.execute(
        &format!(
            "UPDATE {table} SET counter = counter + 1
             WHERE id = ?1 AND {owner_col} = ?2 AND success = 0"
        ),
        params![hunt_id, identity.as_str()],
    )?;
    Ok(changed > 0)
}

/// Delete one of the identity's hunts by row id.
///
/// Never touches the living dex: a derived entry survives the deletion
/// of the hunt that produced it.
pub fn delete_hunt(
    conn: &Connection,
    identity: &SessionIdentity,
    hunt_id: i64,
) -> Result<(), OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    conn.execute(
        &format!("DELETE FROM {table} WHERE id = ?1 AND {owner_col} = ?2"),
        params![hunt_id, identity.as_str()],
    )?;
    Ok(())
}

/// List the identity's hunts in insertion order (row id ascending).
pub fn list_hunts(
    conn: &Connection,
    identity: &SessionIdentity,
) -> Result<Vec<Hunt>, OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    let mut stmt = conn.prepare(&format!(
        "SELECT id, {owner_col}, creature, game, method, counter, success
         FROM {table} WHERE {owner_col} = ?1 ORDER BY id"
    ))?;
    let rows = stmt.query_map(params![identity.as_str()], row_to_hunt)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_account(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_digest: row.get(3)?,
        bio: row.get(4)?,
    })
}

pub(crate) fn row_to_hunt(row: &rusqlite::Row<'_>) -> rusqlite::Result<Hunt> {
    Ok(Hunt {
        id: row.get(0)?,
        owner: row.get(1)?,
        creature: row.get(2)?,
        game: row.get(3)?,
        method: row.get(4)?,
        counter: row.get(5)?,
        success: row.get(6)?,
    })
}
