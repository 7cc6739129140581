//! # Domain Models
//!
//! This crate contains the pure sub-entity types embedded in a user profile
//! (payment accounts, alerts, filters, arbitrators, mediators) together with
//! configuration structs and record-kind constants.
//! Keep it lean: no I/O, no wire formats, no heavy logic. Wire conversion lives in
//! `tpost-wire`; the aggregate lives in `tpost-user`.

pub mod alert;
pub mod config;
pub mod constants;
pub mod dispute;
pub mod filter;
pub mod node;
pub mod payment;

pub use alert::Alert;
pub use dispute::{Arbitrator, Mediator};
pub use filter::{Filter, PaymentAccountFilter};
pub use node::NodeAddress;
pub use payment::PaymentAccount;
