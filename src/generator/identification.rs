//! Identification payload construction (RFC 2407 §4.6.2)
//!
//! This codec always identifies the initiator over UDP/500, the only
//! transport phase-1 ever runs over, so `protocol_id` and `port` are fixed
//! rather than exposed as parameters.

use crate::definitions::{GenericPayloadHeader, IdentificationHeader};
use zerocopy::network_endian::U16;
use zerocopy::AsBytes;

const PROTOCOL_UDP: u8 = 17;
const PORT_IKE: u16 = 500;

/// Build one Identification payload of the given `id_type` wrapping `identity`
pub fn build(id_type: u8, identity: &[u8]) -> Vec<u8> {
    let header = IdentificationHeader {
        id_type,
        protocol_id: PROTOCOL_UDP,
        port: U16::new(PORT_IKE),
    };
    let total_len = core::mem::size_of::<GenericPayloadHeader>()
        + core::mem::size_of::<IdentificationHeader>()
        + identity.len();
    let generic = GenericPayloadHeader {
        next_payload: 0,
        reserved: 0,
        payload_length: U16::new(total_len as u16),
    };

    let mut buf = Vec::with_capacity(total_len);
    buf.extend_from_slice(generic.as_bytes());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(identity);
    buf
}
