//! # Storage Payloads
//!
//! Alerts, filters, arbitrators and mediators are all published to the network as
//! storage payloads. [`StoragePayload`] is the sum type over their wire forms.
//! Code that expects one specific kind narrows with `TryFrom`, which fails with
//! [`EnvelopeError::MalformedEnvelope`] on any other variant.

use crate::error::EnvelopeError;
use crate::schema::{AlertWire, ArbitratorWire, FilterWire, MediatorWire};
use serde::{Deserialize, Serialize};
use tpost_domain::constants::{ALERT, ARBITRATOR, FILTER, MEDIATOR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoragePayload {
    Alert(AlertWire),
    Filter(FilterWire),
    Arbitrator(ArbitratorWire),
    Mediator(MediatorWire),
}

impl StoragePayload {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Alert(_) => ALERT,
            Self::Filter(_) => FILTER,
            Self::Arbitrator(_) => ARBITRATOR,
            Self::Mediator(_) => MEDIATOR,
        }
    }
}

fn variant_mismatch(expected: &'static str, found: &StoragePayload) -> EnvelopeError {
    EnvelopeError::MalformedEnvelope {
        message: format!("expected {expected} payload, found {}", found.kind()).into(),
        context: None,
    }
}

macro_rules! payload_variant {
    ($wire:ty, $variant:ident, $kind:expr) => {
        impl From<$wire> for StoragePayload {
            fn from(wire: $wire) -> Self {
                Self::$variant(wire)
            }
        }

        impl TryFrom<StoragePayload> for $wire {
            type Error = EnvelopeError;

            fn try_from(payload: StoragePayload) -> Result<Self, Self::Error> {
                match payload {
                    StoragePayload::$variant(wire) => Ok(wire),
                    other => Err(variant_mismatch($kind, &other)),
                }
            }
        }
    };
}

payload_variant!(AlertWire, Alert, ALERT);
payload_variant!(FilterWire, Filter, FILTER);
payload_variant!(ArbitratorWire, Arbitrator, ARBITRATOR);
payload_variant!(MediatorWire, Mediator, MEDIATOR);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_accepts_matching_variant() {
        let payload = StoragePayload::from(MediatorWire::default());
        assert!(MediatorWire::try_from(payload).is_ok());
    }

    #[test]
    fn narrowing_rejects_other_variant() {
        let payload = StoragePayload::from(MediatorWire::default());
        let err = ArbitratorWire::try_from(payload).unwrap_err();

        assert!(matches!(err, EnvelopeError::MalformedEnvelope { .. }));
        assert!(err.to_string().contains("expected arbitrator payload, found mediator"));
    }
}
