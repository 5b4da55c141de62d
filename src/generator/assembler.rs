//! Stitches a list of already-built top-level payloads into one datagram
//!
//! This is the single authority for every top-level payload's "next
//! payload" field: builders leave byte 0 of their own buffer as a
//! placeholder, and [`assemble`] overwrites it here, once, based on the
//! payload's real position in the chain. No other part of the crate may
//! write that byte.

use crate::definitions::params::{ExchangeType, PayloadType};
use crate::definitions::Header;
use crate::error::BuildError;
use zerocopy::network_endian::{U32, U64};
use zerocopy::AsBytes;

/// Assemble a full ISAKMP phase-1 datagram
///
/// `payloads` is the ordered top-level payload chain (SA, Key Exchange,
/// Nonce, Identification, Vendor ID, ...), each entry already including its
/// own generic header with byte 0 left as a placeholder. Responder cookie
/// and message id are always zero, matching the initiator side of phase 1.
pub fn assemble(
    exchange_type: ExchangeType,
    initiator_cookie: u64,
    payloads: &[(PayloadType, Vec<u8>)],
) -> Result<Vec<u8>, BuildError> {
    if payloads.len() > u8::MAX as usize {
        return Err(BuildError::TooManyPayloads);
    }

    let total_len: usize =
        core::mem::size_of::<Header>() + payloads.iter().map(|(_, bytes)| bytes.len()).sum::<usize>();

    let first_kind = payloads.first().map(|(kind, _)| *kind).unwrap_or(PayloadType::None);
    let header = Header {
        initiator_cookie: U64::new(initiator_cookie),
        responder_cookie: U64::new(0),
        next_payload: first_kind as u8,
        version: 0x10,
        exchange_type: exchange_type.as_u8(),
        flags: 0,
        message_id: U32::new(0),
        length: U32::new(total_len as u32),
    };

    let mut buf = Vec::with_capacity(total_len);
    buf.extend_from_slice(header.as_bytes());

    for (i, (_, bytes)) in payloads.iter().enumerate() {
        let next_kind = payloads.get(i + 1).map(|(kind, _)| *kind).unwrap_or(PayloadType::None);
        let mut payload = bytes.clone();
        payload[0] = next_kind as u8;
        buf.extend_from_slice(&payload);
    }

    Ok(buf)
}
