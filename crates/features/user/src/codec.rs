//! Conversion between [`UserProfile`] and [`DiskEnvelope`].
//!
//! Every field is mapped explicitly through the sub-entity's [`WireCodec`]. Each
//! optional sub-entity has its own envelope slot.

use crate::account::AccountId;
use crate::accounts::PaymentAccounts;
use crate::error::UserError;
use crate::profile::UserProfile;
use tpost_domain::config::{CodecConfig, DuplicatePolicy};
use tpost_domain::constants::USER;
use tpost_domain::{Alert, Arbitrator, Filter, Mediator, PaymentAccount};
use tpost_wire::frame::{decode_frame, encode_frame};
use tpost_wire::schema::{PaymentAccountWire, UserWire};
use tpost_wire::{DiskEnvelope, EnvelopeError, EnvelopeErrorExt, PayloadCodec, StoragePayload, WireCodec};
use tracing::{debug, warn};

impl UserProfile {
    /// Converts the profile into a user envelope. Never fails.
    ///
    /// Payment accounts are written in ascending id order.
    #[must_use]
    pub fn encode(&self) -> DiskEnvelope {
        let wire = UserWire {
            account_id: self.account_id.to_string(),
            payment_accounts: self.payment_accounts.iter().map(WireCodec::to_wire).collect(),
            current_payment_account: self.current_payment_account.as_ref().map(WireCodec::to_wire),
            accepted_language_locale_codes: self.accepted_language_locale_codes.clone(),
            developers_alert: self.developers_alert.as_ref().map(WireCodec::to_wire),
            displayed_alert: self.displayed_alert.as_ref().map(WireCodec::to_wire),
            developers_filter: self.developers_filter.as_ref().map(WireCodec::to_wire),
            registered_arbitrator: self.registered_arbitrator.as_ref().map(WireCodec::to_wire),
            registered_mediator: self.registered_mediator.as_ref().map(WireCodec::to_wire),
            accepted_arbitrators: self.accepted_arbitrators.iter().map(WireCodec::to_wire).collect(),
            accepted_mediators: self.accepted_mediators.iter().map(WireCodec::to_wire).collect(),
        };

        debug!(
            account_id = %self.account_id,
            payment_accounts = wire.payment_accounts.len(),
            accepted_arbitrators = wire.accepted_arbitrators.len(),
            accepted_mediators = wire.accepted_mediators.len(),
            "User profile encoded"
        );
        DiskEnvelope::from(wire)
    }

    /// Reconstructs a profile, rejecting duplicate payment accounts.
    ///
    /// # Errors
    /// See [`UserProfile::decode_with`].
    pub fn decode(envelope: DiskEnvelope) -> Result<Self, EnvelopeError> {
        Self::decode_with(envelope, DuplicatePolicy::default())
    }

    /// Reconstructs a profile from a user envelope.
    ///
    /// # Errors
    /// * [`EnvelopeError::MalformedEnvelope`] if the envelope is not a user record, the
    ///   account id is empty, or any sub-entity fails to convert.
    /// * [`EnvelopeError::DuplicateIdentity`] if two payment accounts share an id and the
    ///   policy is [`DuplicatePolicy::Reject`].
    pub fn decode_with(
        envelope: DiskEnvelope,
        duplicates: DuplicatePolicy,
    ) -> Result<Self, EnvelopeError> {
        let wire = envelope.into_user()?;

        let account_id =
            AccountId::new(wire.account_id).map_err(|_| EnvelopeError::MalformedEnvelope {
                message: "`account_id` must not be empty".into(),
                context: Some(USER.into()),
            })?;

        let profile = Self {
            payment_accounts: decode_payment_accounts(wire.payment_accounts, duplicates)?,
            current_payment_account: decode_optional::<PaymentAccount>(
                wire.current_payment_account,
                "current_payment_account",
            )?,
            accepted_language_locale_codes: wire.accepted_language_locale_codes,
            developers_alert: decode_optional::<Alert>(wire.developers_alert, "developers_alert")?,
            displayed_alert: decode_optional::<Alert>(wire.displayed_alert, "displayed_alert")?,
            developers_filter: decode_optional::<Filter>(
                wire.developers_filter,
                "developers_filter",
            )?,
            registered_arbitrator: decode_optional::<Arbitrator>(
                wire.registered_arbitrator,
                "registered_arbitrator",
            )?,
            registered_mediator: decode_optional::<Mediator>(
                wire.registered_mediator,
                "registered_mediator",
            )?,
            accepted_arbitrators: decode_sequence::<Arbitrator>(
                wire.accepted_arbitrators,
                "accepted_arbitrators",
            )?,
            accepted_mediators: decode_sequence::<Mediator>(
                wire.accepted_mediators,
                "accepted_mediators",
            )?,
            account_id,
        };

        debug!(
            account_id = %profile.account_id,
            payment_accounts = profile.payment_accounts.len(),
            "User profile decoded"
        );
        Ok(profile)
    }

    /// Encodes the profile and frames it.
    ///
    /// # Errors
    /// Propagates framing failures from [`encode_frame`].
    pub fn to_bytes(&self, config: &CodecConfig) -> Result<Vec<u8>, EnvelopeError> {
        encode_frame(&self.encode(), config.compression)
    }

    /// Unframes and decodes a profile, applying the configured duplicate policy.
    ///
    /// # Errors
    /// Any framing error from [`decode_frame`] plus the errors of [`UserProfile::decode_with`].
    pub fn from_bytes(bytes: &[u8], config: &CodecConfig) -> Result<Self, EnvelopeError> {
        Self::decode_with(decode_frame(bytes)?, config.duplicate_accounts)
    }

    /// Narrows an incoming storage payload to an arbitrator and accepts it.
    ///
    /// Returns `false` when an arbitrator with the same node address was already accepted.
    ///
    /// # Errors
    /// Returns [`UserError::InvalidEntity`] wrapping [`EnvelopeError::MalformedEnvelope`]
    /// for any other payload kind or an invalid arbitrator.
    pub fn accept_arbitrator_payload(&mut self, payload: StoragePayload) -> Result<bool, UserError> {
        let arbitrator = Arbitrator::from_payload(payload).context("accepted arbitrator payload")?;
        self.accept_arbitrator(arbitrator)
    }

    /// Narrows an incoming storage payload to a mediator and accepts it.
    ///
    /// # Errors
    /// Returns [`UserError::InvalidEntity`] wrapping [`EnvelopeError::MalformedEnvelope`]
    /// for any other payload kind or an invalid mediator.
    pub fn accept_mediator_payload(&mut self, payload: StoragePayload) -> Result<bool, UserError> {
        let mediator = Mediator::from_payload(payload).context("accepted mediator payload")?;
        self.accept_mediator(mediator)
    }
}

fn decode_payment_accounts(
    wires: Vec<PaymentAccountWire>,
    duplicates: DuplicatePolicy,
) -> Result<PaymentAccounts, EnvelopeError> {
    let mut accounts = PaymentAccounts::new();

    for (index, wire) in wires.into_iter().enumerate() {
        let account =
            PaymentAccount::from_wire(wire).context(format!("payment_accounts[{index}]"))?;
        let Some(previous) = accounts.insert(account) else {
            continue;
        };

        match duplicates {
            DuplicatePolicy::Reject => {
                return Err(EnvelopeError::DuplicateIdentity {
                    message: format!("payment account `{}` appears more than once", previous.id)
                        .into(),
                    context: Some(format!("payment_accounts[{index}]").into()),
                });
            },
            DuplicatePolicy::LastWriteWins => {
                warn!(id = %previous.id, index, "Duplicate payment account replaced by later entry");
            },
        }
    }

    Ok(accounts)
}

fn decode_optional<T: WireCodec>(
    wire: Option<T::Wire>,
    field: &'static str,
) -> Result<Option<T>, EnvelopeError> {
    wire.map(T::from_wire).transpose().context(field)
}

fn decode_sequence<T: WireCodec>(
    wires: Vec<T::Wire>,
    field: &'static str,
) -> Result<Vec<T>, EnvelopeError> {
    wires
        .into_iter()
        .enumerate()
        .map(|(index, wire)| T::from_wire(wire).context(format!("{field}[{index}]")))
        .collect()
}
