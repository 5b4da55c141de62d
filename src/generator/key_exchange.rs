//! Key Exchange payload construction (RFC 2408 §3.8)
//!
//! This codec fingerprints phase-1 responders; it never completes a real
//! Diffie-Hellman exchange, so the key exchange data is whatever bytes
//! [`crate::byte_source::ByteSource`] hands back.

use crate::byte_source::ByteSource;
use crate::definitions::GenericPayloadHeader;
use crate::error::BuildError;
use zerocopy::network_endian::U16;
use zerocopy::AsBytes;

/// Build one Key Exchange payload of `length` bytes, filled via `source`
///
/// `length` must be a multiple of 4, matching the Diffie-Hellman group
/// sizes this codec ever proposes.
pub fn build(length: usize, source: &mut dyn ByteSource) -> Result<Vec<u8>, BuildError> {
    if length % 4 != 0 {
        return Err(BuildError::KeyExchangeLengthNotMultipleOf4(length));
    }

    let total_len = core::mem::size_of::<GenericPayloadHeader>() + length;
    let generic = GenericPayloadHeader {
        next_payload: 0,
        reserved: 0,
        payload_length: U16::new(total_len as u16),
    };

    let mut buf = Vec::with_capacity(total_len);
    buf.extend_from_slice(generic.as_bytes());
    buf.resize(total_len, 0);
    source.fill(&mut buf[core::mem::size_of::<GenericPayloadHeader>()..]);
    Ok(buf)
}
