//! # Envelope Schema
//!
//! Wire structs for every record carried by a [`DiskEnvelope`](crate::DiskEnvelope).
//!
//! The structs are encoded with `postcard`, which writes fields in declaration order
//! with no field tags. Declaration order is therefore the wire order: append new fields
//! at the end and bump the frame version for anything else.
//!
//! Optional fields are `Option<T>`. Postcard writes a one-byte presence tag (`0` absent,
//! `1` present) before the value, so presence never depends on a value being default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAddressWire {
    pub host_name: String,
    /// Kept wider than a port so out-of-range values are rejected on decode, not truncated.
    pub port: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAccountWire {
    pub id: String,
    pub creation_date: i64,
    pub payment_method_id: String,
    pub account_name: String,
    pub trade_currencies: Vec<String>,
    pub selected_trade_currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertWire {
    pub message: String,
    pub version: String,
    pub update_info: bool,
    pub signature: Option<String>,
    pub owner_pub_key: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAccountFilterWire {
    pub payment_method_id: String,
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterWire {
    pub banned_offer_ids: Vec<String>,
    pub banned_node_addresses: Vec<String>,
    pub banned_payment_accounts: Vec<PaymentAccountFilterWire>,
    pub signature: Option<String>,
    pub owner_pub_key: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitratorWire {
    /// Required; `None` is rejected on decode.
    pub node_address: Option<NodeAddressWire>,
    pub btc_pub_key: Vec<u8>,
    pub btc_address: String,
    pub language_codes: Vec<String>,
    pub registration_date: i64,
    pub registration_pub_key: Vec<u8>,
    pub registration_signature: String,
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediatorWire {
    /// Required; `None` is rejected on decode.
    pub node_address: Option<NodeAddressWire>,
    pub pub_key: Vec<u8>,
    pub language_codes: Vec<String>,
    pub registration_date: i64,
    pub registration_pub_key: Vec<u8>,
    pub registration_signature: String,
    pub email_address: Option<String>,
}

/// The persisted form of a user profile.
///
/// Every optional sub-entity has its own slot. Nothing is shared between slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWire {
    /// Required; an empty string is treated as missing.
    pub account_id: String,
    pub payment_accounts: Vec<PaymentAccountWire>,
    pub current_payment_account: Option<PaymentAccountWire>,
    pub accepted_language_locale_codes: Vec<String>,
    pub developers_alert: Option<AlertWire>,
    pub displayed_alert: Option<AlertWire>,
    pub developers_filter: Option<FilterWire>,
    pub registered_arbitrator: Option<ArbitratorWire>,
    pub registered_mediator: Option<MediatorWire>,
    pub accepted_arbitrators: Vec<ArbitratorWire>,
    pub accepted_mediators: Vec<MediatorWire>,
}

/// Last navigation target of the desktop client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPathWire {
    pub path: Vec<String>,
}

/// Peers remembered between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerListWire {
    pub peers: Vec<NodeAddressWire>,
}
