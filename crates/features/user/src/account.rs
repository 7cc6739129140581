use crate::error::UserError;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Opaque, non-empty identifier of a user account.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// # Errors
    /// Returns [`UserError::InvalidAccountId`] for an empty or whitespace-only id.
    pub fn new(id: impl Into<String>) -> Result<Self, UserError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserError::InvalidAccountId {
                message: "account id must not be empty".into(),
                context: None,
            });
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for AccountId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AccountId {
    type Error = UserError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = UserError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}
