//! The interchange payload: a JSON array of hunt records.

use serde::{Deserialize, Serialize};
use shinyquest_core::Hunt;

use crate::exchange::TransferError;

/// One hunt in the interchange format. Field names are part of the
/// format and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HuntRecord {
    pub creature: String,
    pub game: String,
    pub method: String,
    pub counter: i64,
    pub success: bool,
}

impl From<&Hunt> for HuntRecord {
    fn from(hunt: &Hunt) -> Self {
        Self {
            creature: hunt.creature.clone(),
            game: hunt.game.clone(),
            method: hunt.method.clone(),
            counter: hunt.counter,
            success: hunt.success,
        }
    }
}

/// Parse and validate a payload.
///
/// Rejects the whole payload on malformed JSON, missing or unknown
/// fields, wrong types, or a negative counter — nothing is ever
/// partially accepted.
pub fn parse_payload(text: &str) -> Result<Vec<HuntRecord>, TransferError> {
    let records: Vec<HuntRecord> = serde_json::from_str(text)?;
    for (index, record) in records.iter().enumerate() {
        if record.counter < 0 {
            return Err(TransferError::InvalidRecord {
                index,
                reason: format!("counter must be >= 0, got {}", record.counter),
            });
        }
        if record.creature.is_empty() {
            return Err(TransferError::InvalidRecord {
                index,
                reason: "creature must not be empty".to_string(),
            });
        }
    }
    Ok(records)
}

/// Render records as the human-readable interchange text.
pub fn render_payload(records: &[HuntRecord]) -> Result<String, TransferError> {
    serde_json::to_string_pretty(records).map_err(TransferError::Serialize)
}
