use serde::{Deserialize, Serialize};

/// A signed message published by the developers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub message: String,
    pub version: String,
    /// `true` when the alert announces a new release.
    pub update_info: bool,
    pub signature: Option<String>,
    pub owner_pub_key: Vec<u8>,
}

impl Alert {
    pub fn new(message: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            version: version.into(),
            update_info: false,
            signature: None,
            owner_pub_key: Vec::new(),
        }
    }
}
