//! Session identity: guest vs. registered, decided once per session.
//!
//! The identity value is created at login, registration, or guest-mode
//! entry and threaded explicitly through every storage operation that
//! needs to pick a hunt partition. There is no process-global "current
//! user" anywhere in the workspace.

use uuid::Uuid;

/// Reserved prefix marking guest identity strings in storage.
pub const GUEST_PREFIX: &str = "guest_";

/// The active identity for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIdentity {
    /// An ephemeral guest token (`guest_` + random hex). Lives only for
    /// the application session; never stored as an account.
    Guest(String),
    /// A registered account, by username.
    Registered(String),
}

impl SessionIdentity {
    /// Start a new guest session with a globally-unique token.
    pub fn new_guest() -> Self {
        Self::Guest(format!("{GUEST_PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// Classify a raw identity string read back from storage or an
    /// interchange context. This is the only place the prefix rule lives.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with(GUEST_PREFIX) {
            Self::Guest(raw.to_string())
        } else {
            Self::Registered(raw.to_string())
        }
    }

    /// The raw identity string as stored in hunt and dex rows.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Guest(token) => token,
            Self::Registered(username) => username,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_guest_tokens_are_unique_and_prefixed() {
        let a = SessionIdentity::new_guest();
        let b = SessionIdentity::new_guest();
        assert!(a.is_guest());
        assert!(a.as_str().starts_with(GUEST_PREFIX));
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn classify_by_prefix() {
        assert!(SessionIdentity::classify("guest_abc123").is_guest());
        assert!(!SessionIdentity::classify("ashketchum").is_guest());
        assert_eq!(
            SessionIdentity::classify("ashketchum"),
            SessionIdentity::Registered("ashketchum".to_string())
        );
    }

    #[test]
    fn as_str_round_trips() {
        let id = SessionIdentity::classify("guest_feedbeef");
        assert_eq!(id.as_str(), "guest_feedbeef");
    }
}
