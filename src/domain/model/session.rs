//! Identity/session types cached by the session gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identity handle owned by the external identity collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
}

/// The gate's cached view of the current session.
///
/// `Loading` is a distinct third state: before the initial fetch resolves,
/// callers must not treat the value as "signed out".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Loading,
    SignedIn(Session),
    SignedOut,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            _ => None,
        }
    }
}

/// A change event pushed by the identity collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AuthEvent {
    SignedIn {
        session: Session,
        timestamp: DateTime<Utc>,
    },
    SignedOut {
        timestamp: DateTime<Utc>,
    },
}

impl AuthEvent {
    /// The session this event carries, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthEvent::SignedIn { session, .. } => Some(session),
            AuthEvent::SignedOut { .. } => None,
        }
    }
}
