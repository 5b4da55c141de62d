//! Nonce payload construction (RFC 2408 §3.13)
//!
//! Nonce length is unconstrained by the RFC; unlike Key Exchange there is no
//! multiple-of-4 requirement. The body size comes entirely from this
//! payload's own [`GenericPayloadHeader`], never borrowed from a sibling
//! payload's header size.

use crate::byte_source::ByteSource;
use crate::definitions::GenericPayloadHeader;
use zerocopy::network_endian::U16;
use zerocopy::AsBytes;

/// Build one Nonce payload of `length` bytes, filled via `source`
pub fn build(length: usize, source: &mut dyn ByteSource) -> Vec<u8> {
    let header_len = core::mem::size_of::<GenericPayloadHeader>();
    let total_len = header_len + length;
    let generic = GenericPayloadHeader {
        next_payload: 0,
        reserved: 0,
        payload_length: U16::new(total_len as u16),
    };

    let mut buf = Vec::with_capacity(total_len);
    buf.extend_from_slice(generic.as_bytes());
    buf.resize(total_len, 0);
    source.fill(&mut buf[header_len..]);
    buf
}
