//! Dispute agents: arbitrators and mediators.
//!
//! Both are registered by publishing a signed record to the network. A user keeps
//! the agents it accepts in acceptance order.

use crate::node::NodeAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arbitrator {
    pub node_address: NodeAddress,
    pub btc_pub_key: Vec<u8>,
    pub btc_address: String,
    pub language_codes: Vec<String>,
    /// Registration time in Unix milliseconds.
    pub registration_date: i64,
    pub registration_pub_key: Vec<u8>,
    pub registration_signature: String,
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mediator {
    pub node_address: NodeAddress,
    pub pub_key: Vec<u8>,
    pub language_codes: Vec<String>,
    /// Registration time in Unix milliseconds.
    pub registration_date: i64,
    pub registration_pub_key: Vec<u8>,
    pub registration_signature: String,
    pub email_address: Option<String>,
}

impl Arbitrator {
    #[must_use]
    pub fn speaks(&self, language_code: &str) -> bool {
        self.language_codes.iter().any(|c| c == language_code)
    }
}

impl Mediator {
    #[must_use]
    pub fn speaks(&self, language_code: &str) -> bool {
        self.language_codes.iter().any(|c| c == language_code)
    }
}
