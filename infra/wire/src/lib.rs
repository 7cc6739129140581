//! # Tradepost Wire
//!
//! The binary persistence format for tradepost records.
//!
//! ## Layers
//! - **Schema**: plain wire structs ([`schema`]) encoded field by field with `postcard`.
//! - **Envelope**: [`DiskEnvelope`], the tagged union actually written to disk.
//! - **Payloads**: [`StoragePayload`], the union of network payloads that a user record
//!   may embed, narrowed with checked `TryFrom` conversions.
//! - **Codecs**: [`WireCodec`] and [`PayloadCodec`], implemented by every domain sub-entity.
//! - **Frame**: a versioned `[V][FLAGS][BODY]` blob with optional LZ4 compression ([`frame`]).
//!
//! ## Example
//! ```rust
//! use tpost_wire::{DiskEnvelope, frame, schema::UserWire};
//!
//! let envelope = DiskEnvelope::from(UserWire { account_id: "acc-1".into(), ..UserWire::default() });
//! let bytes = frame::encode_frame(&envelope, true)?;
//! assert_eq!(frame::decode_frame(&bytes)?, envelope);
//! # Ok::<(), tpost_wire::EnvelopeError>(())
//! ```

mod codec;
mod envelope;
mod error;
pub mod frame;
mod payload;
pub mod schema;

pub use codec::{PayloadCodec, WireCodec};
pub use envelope::DiskEnvelope;
pub use error::{EnvelopeError, EnvelopeErrorExt};
pub use payload::StoragePayload;
