//! Guest-hunt interchange: export hunts to a JSON payload and import
//! them into a registered account.
//!
//! This crate owns all cross-partition data movement. Import is
//! all-or-nothing: a malformed payload or a guest destination writes
//! zero rows. Importing does not re-derive the living dex — callers run
//! `shinyquest_db::sync_dex` separately, matching the login and
//! registration flows.

pub mod exchange;
pub mod payload;

pub use exchange::{export_hunts, export_to_path, import_hunts, records_from_path, TransferError};
pub use payload::{parse_payload, render_payload, HuntRecord};
