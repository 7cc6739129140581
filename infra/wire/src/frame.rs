//! # Frame Format
//!
//! A framed envelope is a versioned binary blob:
//!
//! ```text
//! [V(1)][FLAGS(1)][BODY(N)]
//! ```
//!
//! - `V` is the frame format version. Only [`FRAME_VERSION_V1`] is understood.
//! - `FLAGS` bit 0 marks an LZ4 body (block format, little-endian `u32` size prefix).
//!   Any other bit is reserved and rejected.
//! - `BODY` is the postcard encoding of a [`DiskEnvelope`], with no trailing bytes.

use crate::envelope::DiskEnvelope;
use crate::error::{EnvelopeError, EnvelopeErrorExt};
use tracing::debug;

/// Frame header version.
pub const FRAME_VERSION_V1: u8 = 1;

/// Header layout: `[version: u8][flags: u8]`
pub const HEADER_LEN: usize = 2;

/// Flag bit: body was LZ4-compressed.
pub const FLAG_COMPRESSED: u8 = 1 << 0;

const KNOWN_FLAGS: u8 = FLAG_COMPRESSED;

/// Upper bound for a decompressed body. Larger size prefixes are rejected before allocating.
pub const MAX_BODY_LEN: usize = 16 * 1024 * 1024;

/// The two header bytes of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: u8,
    pub flags: u8,
}

impl FrameHeader {
    /// Reads the header without validating it.
    #[must_use]
    pub fn peek(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [version, flags, ..] => Some(Self { version: *version, flags: *flags }),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }

    fn validate(self) -> Result<Self, EnvelopeError> {
        if self.version != FRAME_VERSION_V1 {
            return Err(EnvelopeError::SchemaMismatch {
                message: "Unsupported frame version".into(),
                context: Some(format!("version={}", self.version).into()),
            });
        }
        if self.flags & !KNOWN_FLAGS != 0 {
            return Err(EnvelopeError::SchemaMismatch {
                message: "Unknown frame flags".into(),
                context: Some(format!("flags={:#010b}", self.flags).into()),
            });
        }
        Ok(self)
    }
}

/// Encodes an envelope into a frame.
///
/// # Errors
/// * [`EnvelopeError::Serialization`] if postcard cannot encode the envelope.
/// * [`EnvelopeError::Internal`] if the encoded body exceeds [`MAX_BODY_LEN`].
pub fn encode_frame(envelope: &DiskEnvelope, compress: bool) -> Result<Vec<u8>, EnvelopeError> {
    let body = postcard::to_stdvec(envelope).context("Postcard encoding failed")?;
    if body.len() > MAX_BODY_LEN {
        return Err(EnvelopeError::from(format!(
            "Envelope body of {} bytes exceeds the {MAX_BODY_LEN} byte limit",
            body.len()
        )));
    }
    let body = if compress { lz4_flex::compress_prepend_size(&body) } else { body };
    let flags = if compress { FLAG_COMPRESSED } else { 0 };

    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    buf.push(FRAME_VERSION_V1);
    buf.push(flags);
    buf.extend_from_slice(&body);

    debug!(kind = envelope.kind(), len = buf.len(), compressed = compress, "Envelope framed");
    Ok(buf)
}

/// Decodes a frame back into an envelope.
///
/// # Errors
/// * [`EnvelopeError::MalformedEnvelope`] if the frame is shorter than its header, the
///   compressed size prefix is out of bounds, or bytes trail the envelope.
/// * [`EnvelopeError::SchemaMismatch`] for an unknown version or reserved flag.
/// * [`EnvelopeError::Decompression`] if the LZ4 body is corrupt.
/// * [`EnvelopeError::Serialization`] if the body is not a valid envelope.
pub fn decode_frame(bytes: &[u8]) -> Result<DiskEnvelope, EnvelopeError> {
    let header = FrameHeader::peek(bytes)
        .ok_or_else(|| EnvelopeError::MalformedEnvelope {
            message: format!(
                "Frame too short ({} bytes). Expected at least {HEADER_LEN} bytes",
                bytes.len()
            )
            .into(),
            context: None,
        })?
        .validate()?;
    let body = &bytes[HEADER_LEN..];

    let decompressed;
    let body = if header.is_compressed() {
        check_size_prefix(body)?;
        decompressed = lz4_flex::decompress_size_prepended(body).context("LZ4 body invalid")?;
        decompressed.as_slice()
    } else {
        body
    };

    let (envelope, rest) =
        postcard::take_from_bytes::<DiskEnvelope>(body).context("Postcard decoding failed")?;
    if !rest.is_empty() {
        return Err(EnvelopeError::MalformedEnvelope {
            message: format!("{} trailing bytes after envelope", rest.len()).into(),
            context: None,
        });
    }

    debug!(kind = envelope.kind(), len = bytes.len(), "Envelope unframed");
    Ok(envelope)
}

fn check_size_prefix(body: &[u8]) -> Result<(), EnvelopeError> {
    let Some(prefix) = body.first_chunk::<4>() else {
        return Err(EnvelopeError::malformed("Compressed body is missing its size prefix"));
    };
    let size = u32::from_le_bytes(*prefix) as usize;
    if size > MAX_BODY_LEN {
        return Err(EnvelopeError::MalformedEnvelope {
            message: "Compressed body declares an oversized payload".into(),
            context: Some(format!("size={size}, max={MAX_BODY_LEN}").into()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NavigationPathWire;

    fn sample() -> DiskEnvelope {
        DiskEnvelope::NavigationPath(NavigationPathWire {
            path: vec!["portfolio".to_owned(), "open_offers".to_owned()],
        })
    }

    #[test]
    fn header_is_written_first() {
        let frame = encode_frame(&sample(), false).unwrap();
        assert_eq!(FrameHeader::peek(&frame), Some(FrameHeader { version: 1, flags: 0 }));

        let frame = encode_frame(&sample(), true).unwrap();
        assert!(FrameHeader::peek(&frame).unwrap().is_compressed());
    }

    #[test]
    fn oversized_prefix_is_rejected_before_allocation() {
        let mut frame = vec![FRAME_VERSION_V1, FLAG_COMPRESSED];
        frame.extend_from_slice(&u32::MAX.to_le_bytes());
        frame.extend_from_slice(&[0; 8]);

        let err = decode_frame(&frame).unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedEnvelope { .. }));
    }

    #[test]
    fn missing_size_prefix_is_malformed() {
        let err = decode_frame(&[FRAME_VERSION_V1, FLAG_COMPRESSED, 1]).unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedEnvelope { .. }));
    }
}
