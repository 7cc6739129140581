use serde::{Deserialize, Serialize};

/// A developer-signed ban list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub banned_offer_ids: Vec<String>,
    /// `host:port` strings.
    pub banned_node_addresses: Vec<String>,
    pub banned_payment_accounts: Vec<PaymentAccountFilter>,
    pub signature: Option<String>,
    pub owner_pub_key: Vec<u8>,
}

/// Matches payment accounts by method and a single account field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountFilter {
    pub payment_method_id: String,
    /// Name of the account field to compare, e.g. `"iban"`.
    pub field: String,
    pub value: String,
}

impl Filter {
    #[must_use]
    pub fn is_offer_banned(&self, offer_id: &str) -> bool {
        self.banned_offer_ids.iter().any(|id| id == offer_id)
    }
}
