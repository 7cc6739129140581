use serde::{Deserialize, Serialize};
use std::fmt;

/// Network address of a peer, e.g. an arbitrator's onion host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAddress {
    pub host_name: String,
    pub port: u16,
}

impl NodeAddress {
    pub fn new(host_name: impl Into<String>, port: u16) -> Self {
        Self { host_name: host_name.into(), port }
    }

    /// An address is usable when it names a host and a non-zero port.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.host_name.trim().is_empty() && self.port != 0
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host_name, self.port)
    }
}
