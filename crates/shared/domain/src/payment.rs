use serde::{Deserialize, Serialize};

/// A payment account the user trades with.
///
/// Two accounts are the same account when their [`PaymentAccount::id`] matches;
/// the remaining fields are the account's current state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccount {
    /// Identity key.
    pub id: String,
    /// Creation time in Unix milliseconds.
    pub creation_date: i64,
    pub payment_method_id: String,
    pub account_name: String,
    /// ISO currency codes this account can settle.
    pub trade_currencies: Vec<String>,
    pub selected_trade_currency: Option<String>,
}

impl PaymentAccount {
    pub fn new(id: impl Into<String>, payment_method_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            creation_date: 0,
            payment_method_id: payment_method_id.into(),
            account_name: String::new(),
            trade_currencies: Vec::new(),
            selected_trade_currency: None,
        }
    }

    /// The attribute that decides set membership.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.id
    }
}
