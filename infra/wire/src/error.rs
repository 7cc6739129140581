//! # Envelope Errors
//!
//! This module defines the [`EnvelopeError`] enum reported by every decode path:
//! framing, envelope variant selection, payload narrowing and sub-entity conversion.

use std::borrow::Cow;

/// A specialized [`EnvelopeError`] enum for envelope conversion failures.
#[tpost_derive::tpost_error]
pub enum EnvelopeError {
    /// A structural violation: missing required field, invalid sub-entity payload,
    /// wrong envelope or payload variant, truncated frame.
    #[error("Malformed envelope{}: {message}", format_context(.context))]
    MalformedEnvelope { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The frame reports a version or flag set this decoder does not understand.
    #[error("Schema mismatch{}: {message}", format_context(.context))]
    SchemaMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two entries of an identity-keyed set resolve to the same key.
    #[error("Duplicate identity{}: {message}", format_context(.context))]
    DuplicateIdentity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failure during Postcard serialization or deserialization.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: postcard::Error, context: Option<Cow<'static, str>> },

    /// The LZ4 body of a compressed frame is corrupt.
    #[error("Decompression error{}: {source}", format_context(.context))]
    Decompression { source: lz4_flex::block::DecompressError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl EnvelopeError {
    pub fn malformed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::MalformedEnvelope { message: message.into(), context: None }
    }

    /// `true` for every structural failure, including undecodable bodies.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedEnvelope { .. } | Self::Serialization { .. } | Self::Decompression { .. }
        )
    }
}
