//! Vendor ID payload construction (RFC 2408 §3.16)
//!
//! A Vendor ID payload carries no structure beyond the generic header: the
//! body is whatever opaque bytes (usually an MD5 hash of a vendor string)
//! the caller wants to advertise.

use crate::definitions::GenericPayloadHeader;
use zerocopy::network_endian::U16;
use zerocopy::AsBytes;

/// Build one Vendor ID payload wrapping `vendor_bytes` verbatim
///
/// Byte 0 of the returned buffer is left as a placeholder for
/// [`super::assembler::assemble`] to fill in.
pub fn build(vendor_bytes: &[u8]) -> Vec<u8> {
    let len = core::mem::size_of::<GenericPayloadHeader>() + vendor_bytes.len();
    let generic = GenericPayloadHeader {
        next_payload: 0,
        reserved: 0,
        payload_length: U16::new(len as u16),
    };
    let mut buf = Vec::with_capacity(len);
    buf.extend_from_slice(generic.as_bytes());
    buf.extend_from_slice(vendor_bytes);
    buf
}
