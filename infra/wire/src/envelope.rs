use crate::error::EnvelopeError;
use crate::schema::{NavigationPathWire, PeerListWire, UserWire};
use serde::{Deserialize, Serialize};
use tpost_domain::constants::{NAVIGATION_PATH, PEER_LIST, USER};

/// The outer tagged union written to disk.
///
/// Each variant is one persisted record kind. The variant index is part of the
/// wire format: append new kinds at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskEnvelope {
    User(UserWire),
    NavigationPath(NavigationPathWire),
    PeerList(PeerListWire),
}

impl DiskEnvelope {
    /// Stable name of the carried record kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => USER,
            Self::NavigationPath(_) => NAVIGATION_PATH,
            Self::PeerList(_) => PEER_LIST,
        }
    }

    /// Narrows the envelope to the user record.
    ///
    /// # Errors
    /// Returns [`EnvelopeError::MalformedEnvelope`] when the envelope carries another record kind.
    pub fn into_user(self) -> Result<UserWire, EnvelopeError> {
        match self {
            Self::User(user) => Ok(user),
            other => Err(EnvelopeError::MalformedEnvelope {
                message: format!("expected a {USER} record, found {}", other.kind()).into(),
                context: None,
            }),
        }
    }
}

impl From<UserWire> for DiskEnvelope {
    fn from(user: UserWire) -> Self {
        Self::User(user)
    }
}
