//! # Sub-entity Codecs
//!
//! [`WireCodec`] is the collaborator contract every sub-entity fulfils: a total
//! `to_wire` and a validating `from_wire`. Aggregates call it explicitly for each
//! field they own.
//!
//! [`PayloadCodec`] adds the storage payload round trip for the sub-entities that are
//! also published as network payloads.

use crate::error::{EnvelopeError, EnvelopeErrorExt};
use crate::payload::StoragePayload;
use crate::schema::{
    AlertWire, ArbitratorWire, FilterWire, MediatorWire, NodeAddressWire,
    PaymentAccountFilterWire, PaymentAccountWire,
};
use tpost_domain::{
    Alert, Arbitrator, Filter, Mediator, NodeAddress, PaymentAccount, PaymentAccountFilter,
};

/// Conversion between a domain value and its wire form.
pub trait WireCodec: Sized {
    type Wire;

    fn to_wire(&self) -> Self::Wire;

    /// Validates and converts a wire value.
    ///
    /// # Errors
    /// Returns [`EnvelopeError::MalformedEnvelope`] when the wire value breaks an
    /// invariant of the domain type.
    fn from_wire(wire: Self::Wire) -> Result<Self, EnvelopeError>;

    /// Checks that the value would survive its own wire round trip.
    ///
    /// # Errors
    /// Returns the error [`WireCodec::from_wire`] would report for `self.to_wire()`.
    fn validate(&self) -> Result<(), EnvelopeError> {
        Self::from_wire(self.to_wire()).map(drop)
    }
}

/// Storage payload round trip for payload-backed sub-entities.
pub trait PayloadCodec: WireCodec {
    fn to_payload(&self) -> StoragePayload;

    /// Narrows a payload to this type and converts it.
    ///
    /// # Errors
    /// Returns [`EnvelopeError::MalformedEnvelope`] on a variant mismatch or invalid wire data.
    fn from_payload(payload: StoragePayload) -> Result<Self, EnvelopeError>;
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), EnvelopeError> {
    if value.trim().is_empty() {
        return Err(EnvelopeError::MalformedEnvelope {
            message: format!("`{field}` must not be empty").into(),
            context: None,
        });
    }
    Ok(())
}

impl WireCodec for NodeAddress {
    type Wire = NodeAddressWire;

    fn to_wire(&self) -> NodeAddressWire {
        NodeAddressWire { host_name: self.host_name.clone(), port: u32::from(self.port) }
    }

    fn from_wire(wire: NodeAddressWire) -> Result<Self, EnvelopeError> {
        require_non_empty(&wire.host_name, "host_name")?;
        let port = u16::try_from(wire.port)
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| EnvelopeError::MalformedEnvelope {
                message: format!("port {} is out of range", wire.port).into(),
                context: Some(wire.host_name.clone().into()),
            })?;
        Ok(Self { host_name: wire.host_name, port })
    }
}

impl WireCodec for PaymentAccount {
    type Wire = PaymentAccountWire;

    fn to_wire(&self) -> PaymentAccountWire {
        PaymentAccountWire {
            id: self.id.clone(),
            creation_date: self.creation_date,
            payment_method_id: self.payment_method_id.clone(),
            account_name: self.account_name.clone(),
            trade_currencies: self.trade_currencies.clone(),
            selected_trade_currency: self.selected_trade_currency.clone(),
        }
    }

    fn from_wire(wire: PaymentAccountWire) -> Result<Self, EnvelopeError> {
        require_non_empty(&wire.id, "id")?;
        require_non_empty(&wire.payment_method_id, "payment_method_id")
            .context(format!("payment account {}", wire.id))?;

        Ok(Self {
            id: wire.id,
            creation_date: wire.creation_date,
            payment_method_id: wire.payment_method_id,
            account_name: wire.account_name,
            trade_currencies: wire.trade_currencies,
            selected_trade_currency: wire.selected_trade_currency,
        })
    }
}

impl WireCodec for Alert {
    type Wire = AlertWire;

    fn to_wire(&self) -> AlertWire {
        AlertWire {
            message: self.message.clone(),
            version: self.version.clone(),
            update_info: self.update_info,
            signature: self.signature.clone(),
            owner_pub_key: self.owner_pub_key.clone(),
        }
    }

    fn from_wire(wire: AlertWire) -> Result<Self, EnvelopeError> {
        require_non_empty(&wire.message, "message").context("alert")?;
        Ok(Self {
            message: wire.message,
            version: wire.version,
            update_info: wire.update_info,
            signature: wire.signature,
            owner_pub_key: wire.owner_pub_key,
        })
    }
}

impl WireCodec for PaymentAccountFilter {
    type Wire = PaymentAccountFilterWire;

    fn to_wire(&self) -> PaymentAccountFilterWire {
        PaymentAccountFilterWire {
            payment_method_id: self.payment_method_id.clone(),
            field: self.field.clone(),
            value: self.value.clone(),
        }
    }

    fn from_wire(wire: PaymentAccountFilterWire) -> Result<Self, EnvelopeError> {
        require_non_empty(&wire.payment_method_id, "payment_method_id")?;
        Ok(Self { payment_method_id: wire.payment_method_id, field: wire.field, value: wire.value })
    }
}

impl WireCodec for Filter {
    type Wire = FilterWire;

    fn to_wire(&self) -> FilterWire {
        FilterWire {
            banned_offer_ids: self.banned_offer_ids.clone(),
            banned_node_addresses: self.banned_node_addresses.clone(),
            banned_payment_accounts: self
                .banned_payment_accounts
                .iter()
                .map(WireCodec::to_wire)
                .collect(),
            signature: self.signature.clone(),
            owner_pub_key: self.owner_pub_key.clone(),
        }
    }

    fn from_wire(wire: FilterWire) -> Result<Self, EnvelopeError> {
        let banned_payment_accounts = wire
            .banned_payment_accounts
            .into_iter()
            .map(PaymentAccountFilter::from_wire)
            .collect::<Result<Vec<_>, _>>()
            .context("filter banned payment accounts")?;

        Ok(Self {
            banned_offer_ids: wire.banned_offer_ids,
            banned_node_addresses: wire.banned_node_addresses,
            banned_payment_accounts,
            signature: wire.signature,
            owner_pub_key: wire.owner_pub_key,
        })
    }
}

fn required_node_address(
    wire: Option<NodeAddressWire>,
    owner: &'static str,
) -> Result<NodeAddress, EnvelopeError> {
    let wire = wire.ok_or_else(|| EnvelopeError::MalformedEnvelope {
        message: "missing node address".into(),
        context: Some(owner.into()),
    })?;
    NodeAddress::from_wire(wire).context(owner)
}

impl WireCodec for Arbitrator {
    type Wire = ArbitratorWire;

    fn to_wire(&self) -> ArbitratorWire {
        ArbitratorWire {
            node_address: Some(self.node_address.to_wire()),
            btc_pub_key: self.btc_pub_key.clone(),
            btc_address: self.btc_address.clone(),
            language_codes: self.language_codes.clone(),
            registration_date: self.registration_date,
            registration_pub_key: self.registration_pub_key.clone(),
            registration_signature: self.registration_signature.clone(),
            email_address: self.email_address.clone(),
        }
    }

    fn from_wire(wire: ArbitratorWire) -> Result<Self, EnvelopeError> {
        let node_address = required_node_address(wire.node_address, "arbitrator")?;
        require_non_empty(&wire.registration_signature, "registration_signature")
            .context(format!("arbitrator {node_address}"))?;

        Ok(Self {
            node_address,
            btc_pub_key: wire.btc_pub_key,
            btc_address: wire.btc_address,
            language_codes: wire.language_codes,
            registration_date: wire.registration_date,
            registration_pub_key: wire.registration_pub_key,
            registration_signature: wire.registration_signature,
            email_address: wire.email_address,
        })
    }
}

impl WireCodec for Mediator {
    type Wire = MediatorWire;

    fn to_wire(&self) -> MediatorWire {
        MediatorWire {
            node_address: Some(self.node_address.to_wire()),
            pub_key: self.pub_key.clone(),
            language_codes: self.language_codes.clone(),
            registration_date: self.registration_date,
            registration_pub_key: self.registration_pub_key.clone(),
            registration_signature: self.registration_signature.clone(),
            email_address: self.email_address.clone(),
        }
    }

    fn from_wire(wire: MediatorWire) -> Result<Self, EnvelopeError> {
        let node_address = required_node_address(wire.node_address, "mediator")?;
        require_non_empty(&wire.registration_signature, "registration_signature")
            .context(format!("mediator {node_address}"))?;

        Ok(Self {
            node_address,
            pub_key: wire.pub_key,
            language_codes: wire.language_codes,
            registration_date: wire.registration_date,
            registration_pub_key: wire.registration_pub_key,
            registration_signature: wire.registration_signature,
            email_address: wire.email_address,
        })
    }
}

impl PayloadCodec for Alert {
    fn to_payload(&self) -> StoragePayload {
        self.to_wire().into()
    }

    fn from_payload(payload: StoragePayload) -> Result<Self, EnvelopeError> {
        Self::from_wire(AlertWire::try_from(payload)?)
    }
}

impl PayloadCodec for Filter {
    fn to_payload(&self) -> StoragePayload {
        self.to_wire().into()
    }

    fn from_payload(payload: StoragePayload) -> Result<Self, EnvelopeError> {
        Self::from_wire(FilterWire::try_from(payload)?)
    }
}

impl PayloadCodec for Arbitrator {
    fn to_payload(&self) -> StoragePayload {
        self.to_wire().into()
    }

    fn from_payload(payload: StoragePayload) -> Result<Self, EnvelopeError> {
        Self::from_wire(ArbitratorWire::try_from(payload)?)
    }
}

impl PayloadCodec for Mediator {
    fn to_payload(&self) -> StoragePayload {
        self.to_wire().into()
    }

    fn from_payload(payload: StoragePayload) -> Result<Self, EnvelopeError> {
        Self::from_wire(MediatorWire::try_from(payload)?)
    }
}
