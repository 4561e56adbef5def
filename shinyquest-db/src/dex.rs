//! Living-dex derivation from successful hunts.
//!
//! Callers run `sync_dex` on login, on registration, and before
//! rendering the dex view; it is idempotent and safe to repeat.

use rusqlite::{params, Connection};
use shinyquest_core::SessionIdentity;

use crate::operations::{hunt_partition, OperationError};

/// Derive living-dex entries from the identity's successful hunts.
///
/// For each distinct (creature, game) pair among successful hunts, insert
/// a dex entry unless one already exists for (identity, creature) — the
/// first recorded game wins, a later game for an already-dexed creature
/// is silently dropped. Creatures with a removal tombstone are skipped.
///
/// Runs in a single transaction so an interrupted pass leaves either the
/// full derivation or none of it. Returns the number of entries inserted.
pub fn sync_dex(conn: &Connection, identity: &SessionIdentity) -> Result<u32, OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    let tx = conn.unchecked_transaction()?;

    let pairs: Vec<(String, String)> = {
        let mut stmt = tx.prepare(&format!(
            "SELECT DISTINCT creature, game FROM {table}
             WHERE {owner_col} = ?1 AND success = 1 ORDER BY creature, game"
        ))?;
        let rows = stmt.query_map(params![identity.as_str()], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        rows.collect::<Result<Vec<_>, _>>()?
    };

    let mut inserted = 0u32;
    for (creature, game) in &pairs {
        let changed = tx.execute(
            "INSERT OR IGNORE INTO living_dex (user_id, creature, game)
             SELECT ?1, ?2, ?3
             WHERE NOT EXISTS (
                 SELECT 1 FROM dex_removals WHERE user_id = ?1 AND creature = ?2
             )",
            params![identity.as_str(), creature, game],
        )?;
        inserted += changed as u32;
    }

    tx.commit()?;

    if inserted > 0 {
        log::debug!("derived {} living-dex entries for {}", inserted, identity.as_str());
    }
    Ok(inserted)
}

/// Manually remove a dex entry without touching the underlying hunts.
///
/// Writes a removal tombstone in the same transaction, so later sync
/// passes do not resurrect the entry. Returns `false` if the identity
/// had no entry for the creature (the tombstone is still recorded).
pub fn remove_dex_entry(
    conn: &Connection,
    identity: &SessionIdentity,
    creature: &str,
) -> Result<bool, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let deleted = tx.execute(
        "DELETE FROM living_dex WHERE user_id = ?1 AND creature = ?2",
        params![identity.as_str(), creature],
    )?;
    tx.execute(
        "INSERT OR IGNORE INTO dex_removals (user_id, creature) VALUES (?1, ?2)",
        params![identity.as_str(), creature],
    )?;
    tx.commit()?;
    Ok(deleted > 0)
}

/// Lift a removal tombstone so the next sync may re-derive the entry.
///
/// Returns `false` if no tombstone existed.
pub fn clear_dex_removal(
    conn: &Connection,
    identity: &SessionIdentity,
    creature: &str,
) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "DELETE FROM dex_removals WHERE user_id = ?1 AND creature = ?2",
        params![identity.as_str(), creature],
    )?;
    Ok(changed > 0)
}
