//! # User Profile
//!
//! The user profile aggregate and its mapping to and from the disk envelope.
//!
//! ## Overview
//! A [`UserProfile`] collects everything the client remembers about its user: payment
//! accounts, the current account selection, accepted languages, developer alerts and
//! filter, the user's own arbitrator/mediator registrations, and the arbitrators and
//! mediators the user accepts.
//!
//! * [`UserProfile::encode`] / [`UserProfile::decode`] convert to and from a
//!   [`DiskEnvelope`](tpost_wire::DiskEnvelope).
//! * [`UserProfile::to_bytes`] / [`UserProfile::from_bytes`] additionally frame the
//!   envelope according to a [`CodecConfig`](tpost_domain::config::CodecConfig).
//!
//! ## Invariants
//! * The account id is never empty ([`AccountId`]).
//! * Payment accounts are unique by id ([`PaymentAccounts`]).
//! * Optional sub-entities are either fully present or absent, each in its own slot.
//! * Languages, accepted arbitrators and accepted mediators keep their order.
//! * Every sub-entity the mutators accept passes [`WireCodec::validate`](tpost_wire::WireCodec::validate),
//!   so `decode(encode(p)) == p` holds for any profile built through this API.

mod account;
mod accounts;
mod codec;
mod error;
mod profile;

pub use crate::account::AccountId;
pub use crate::accounts::PaymentAccounts;
pub use crate::error::{UserError, UserErrorExt};
pub use crate::profile::UserProfile;
