//! Read queries: profile statistics and living-dex views.

use rusqlite::{params, Connection};
use shinyquest_core::{DexEntry, Hunt, HuntStats, SessionIdentity};

use crate::operations::{hunt_partition, row_to_hunt, OperationError};

// ── Statistics ──────────────────────────────────────────────────────────────

/// Compute summary metrics for a registered account's hunts.
///
/// Grouping runs in ascending method-name order, so the favorite-method
/// tie-break is deterministic: the alphabetically first method among
/// those tied for the largest row count wins.
pub fn profile_stats(conn: &Connection, username: &str) -> Result<HuntStats, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT method, COUNT(*), COALESCE(SUM(counter), 0),
                COALESCE(SUM(CASE WHEN success = 1 THEN 1 ELSE 0 END), 0)
         FROM hunts WHERE user_id = ?1 GROUP BY method ORDER BY method",
    )?;
    let groups = stmt
        .query_map(params![username], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stats = HuntStats::default();
    let mut best_count = 0i64;
    for (method, count, attempts, successes) in groups {
        stats.total_hunts += count;
        stats.total_attempts += attempts;
        stats.successful_hunts += successes;
        if count > best_count {
            best_count = count;
            stats.favorite_method = Some(method);
        }
    }

    stats.unique_creatures_caught = conn.query_row(
        "SELECT COUNT(DISTINCT creature) FROM hunts WHERE user_id = ?1 AND success = 1",
        params![username],
        |row| row.get(0),
    )?;

    if stats.successful_hunts > 0 {
        stats.avg_attempts_per_success =
            stats.total_attempts as f64 / stats.successful_hunts as f64;
    }

    Ok(stats)
}

// ── Living Dex Views ────────────────────────────────────────────────────────

/// List the identity's dex entries in derivation order (row id ascending).
pub fn list_dex(
    conn: &Connection,
    identity: &SessionIdentity,
) -> Result<Vec<DexEntry>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, creature, game FROM living_dex WHERE user_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![identity.as_str()], |row| {
        Ok(DexEntry {
            id: row.get(0)?,
            owner: row.get(1)?,
            creature: row.get(2)?,
            game: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// The first successful hunt of `creature` for the identity, if any.
///
/// Backs the dex detail view (game, method, winning attempt count).
pub fn catch_details(
    conn: &Connection,
    identity: &SessionIdentity,
    creature: &str,
) -> Result<Option<Hunt>, OperationError> {
    let (table, owner_col) = hunt_partition(identity);
    let mut stmt = conn.prepare(&format!(
        "SELECT id, {owner_col}, creature, game, method, counter, success
         FROM {table} WHERE {owner_col} = ?1 AND creature = ?2 AND success = 1
         ORDER BY id LIMIT 1"
    ))?;
    let result = stmt.query_row(params![identity.as_str(), creature], row_to_hunt);
    match result {
        Ok(hunt) => Ok(Some(hunt)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
