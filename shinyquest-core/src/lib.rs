//! Domain types and session identity for the shiny-hunt tracker.
//!
//! This crate defines the data model without any database dependencies.
//! Consumers use these types directly for display or pass them to
//! `shinyquest-db` for persistence.

pub mod auth;
pub mod identity;
pub mod types;

pub use auth::digest_password;
pub use identity::{SessionIdentity, GUEST_PREFIX};
pub use types::{Account, DexEntry, Hunt, HuntStats};
