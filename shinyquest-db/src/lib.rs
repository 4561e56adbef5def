//! SQLite persistence layer for the shiny-hunt tracker.
//!
//! Provides schema creation, account and hunt CRUD, statistics queries,
//! and living-dex derivation, backed by SQLite (via rusqlite with the
//! bundled feature). All functions take a caller-owned `Connection`;
//! partition-sensitive operations take a `SessionIdentity` to pick the
//! registered or guest hunt table.

pub mod dex;
pub mod operations;
pub mod queries;
pub mod schema;

pub use dex::{clear_dex_removal, remove_dex_entry, sync_dex};
pub use operations::{
    authenticate, create_account, delete_hunt, find_account, increment_counter, insert_hunt,
    list_hunts, mark_successful, update_bio, OperationError,
};
pub use queries::{catch_details, list_dex, profile_stats};
pub use schema::{open_database, open_memory, SchemaError};
