//! Static creature roster used to render the living-dex completion grid.
//!
//! Reference data only — never persisted, never mutated. The db layer
//! stores whatever creature names the user enters; this crate just says
//! which names make up a complete Gen-1 dex.

pub mod roster;

pub use roster::{completion, dex_number, is_known, CompletionSummary, GEN1_ROSTER};
