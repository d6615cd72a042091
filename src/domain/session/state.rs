//! Derived availability of a session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a session still accepts enrollments.
///
/// Never stored; always recomputed from capacity, membership, date and `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionState {
    Open,
    Close,
}

impl SessionState {
    /// The state rule: closed when full or when the date has passed.
    pub fn derive(is_full: bool, date_passed: bool) -> Self {
        if is_full || date_passed {
            SessionState::Close
        } else {
            SessionState::Open
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SessionState::Open)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Open => "OPEN",
            SessionState::Close => "CLOSE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_logical_or() {
        assert_eq!(SessionState::derive(false, false), SessionState::Open);
        assert_eq!(SessionState::derive(true, false), SessionState::Close);
        assert_eq!(SessionState::derive(false, true), SessionState::Close);
        assert_eq!(SessionState::derive(true, true), SessionState::Close);
    }

    #[test]
    fn display_and_serde_use_uppercase() {
        assert_eq!(SessionState::Open.to_string(), "OPEN");
        assert_eq!(serde_json::to_string(&SessionState::Close).unwrap(), "\"CLOSE\"");
    }
}
