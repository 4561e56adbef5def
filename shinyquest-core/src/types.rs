//! Data model types for accounts, hunts, and the living dex.

use serde::{Deserialize, Serialize};

// ── Account ─────────────────────────────────────────────────────────────────

/// A registered user account.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// SHA-256 hex digest of the password. Never the plaintext.
    pub password_digest: String,
    pub bio: String,
}

// ── Hunt ────────────────────────────────────────────────────────────────────

/// One attempt-tracking record for catching a specific creature in a
/// specific game using a specific method.
///
/// `owner` is the raw identity string (username or `guest_…` token);
/// which physical table the row lives in is decided by the identity
/// kind, not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunt {
    pub id: i64,
    pub owner: String,
    pub creature: String,
    pub game: String,
    pub method: String,
    pub counter: i64,
    pub success: bool,
}

// ── Living Dex ──────────────────────────────────────────────────────────────

/// A derived fact: this identity has at least one successful hunt of
/// `creature` in `game`. At most one entry per (owner, creature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexEntry {
    pub id: i64,
    pub owner: String,
    pub creature: String,
    pub game: String,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Per-account summary metrics computed from stored hunts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HuntStats {
    pub total_hunts: i64,
    pub total_attempts: i64,
    pub successful_hunts: i64,
    pub unique_creatures_caught: i64,
    /// Method with the most hunt rows; ties break toward the first
    /// method in ascending name order. `None` for an account with no hunts.
    pub favorite_method: Option<String>,
    /// `total_attempts / successful_hunts`, or 0.0 with no successes.
    pub avg_attempts_per_success: f64,
}
