//! Export and import between hunt partitions via the interchange payload.

use rusqlite::{params, Connection};
use shinyquest_core::SessionIdentity;
use shinyquest_db::operations::{self, OperationError};
use thiserror::Error;

use crate::payload::{self, HuntRecord};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Malformed interchange payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("Could not serialize payload: {0}")]
    Serialize(serde_json::Error),
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("Import target is a guest session; register an account first")]
    GuestImportRejected,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Collect all of an identity's hunts as interchange records.
///
/// Built for the guest export flow, but works for any identity.
pub fn export_hunts(
    conn: &Connection,
    identity: &SessionIdentity,
) -> Result<Vec<HuntRecord>, TransferError> {
    let hunts = operations::list_hunts(conn, identity)?;
    Ok(hunts.iter().map(HuntRecord::from).collect())
}

/// Export an identity's hunts to an interchange file.
pub fn export_to_path(
    conn: &Connection,
    identity: &SessionIdentity,
    path: &std::path::Path,
) -> Result<usize, TransferError> {
    let records = export_hunts(conn, identity)?;
    std::fs::write(path, payload::render_payload(&records)?)?;
    log::debug!("exported {} hunts to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read and validate an interchange file.
pub fn records_from_path(path: &std::path::Path) -> Result<Vec<HuntRecord>, TransferError> {
    let text = std::fs::read_to_string(path)?;
    payload::parse_payload(&text)
}

/// Import records into a registered account's hunt partition, preserving
/// counter and success values verbatim.
///
/// Rejects a guest destination before any write. All inserts run in one
/// transaction; a failure leaves zero rows behind. The living dex is NOT
/// re-derived here — run `shinyquest_db::sync_dex` afterwards, as the
/// login and registration flows do.
pub fn import_hunts(
    conn: &Connection,
    identity: &SessionIdentity,
    records: &[HuntRecord],
) -> Result<u32, TransferError> {
    let username = match identity {
        SessionIdentity::Guest(_) => return Err(TransferError::GuestImportRejected),
        SessionIdentity::Registered(username) => username,
    };

    let tx = conn.unchecked_transaction()?;
    for record in records {
        tx.execute(
            "INSERT INTO hunts (user_id, creature, game, method, counter, success)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                username,
                record.creature,
                record.game,
                record.method,
                record.counter,
                record.success,
            ],
        )?;
    }
    tx.commit()?;

    let count = records.len() as u32;
    log::debug!("imported {} hunts into account {}", count, username);
    Ok(count)
}
