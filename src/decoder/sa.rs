//! Summarizes a Security Association payload in an inbound datagram
//!
//! Reduced to exactly what the original scanner reported: which mode
//! answered, and how many transforms it proposed back - never the
//! individual transform contents.

use crate::definitions::params::{ExchangeType, PayloadType};
use crate::definitions::{GenericPayloadHeader, ProposalHeader, SaHeader};
use zerocopy::FromBytes;

const MIN_LEN: usize = core::mem::size_of::<GenericPayloadHeader>()
    + core::mem::size_of::<SaHeader>()
    + core::mem::size_of::<ProposalHeader>();

/// Summarize the SA payload at the start of `buf`
///
/// On success, returns the summary fragment, the number of bytes consumed
/// and the kind of the following payload. On truncation, returns the exact
/// message the original scanner reports for an undersized handshake.
pub fn summarize(buf: &[u8], exchange_type_raw: u8) -> Result<(String, usize, PayloadType), String> {
    let too_short = || "IKE Handshake returned (packet too short to decode)".to_string();

    let generic = GenericPayloadHeader::ref_from_prefix(buf).ok_or_else(too_short)?;
    let declared_len = generic.payload_length.get() as usize;
    if declared_len < MIN_LEN || declared_len > buf.len() {
        return Err(too_short());
    }

    let proposal_offset =
        core::mem::size_of::<GenericPayloadHeader>() + core::mem::size_of::<SaHeader>();
    let proposal = ProposalHeader::ref_from_prefix(&buf[proposal_offset..]).ok_or_else(too_short)?;
    let num_transforms = proposal.num_transforms;

    let mode = match exchange_type_raw {
        v if v == ExchangeType::IdentityProtection as u8 => "Main Mode Handshake returned".to_string(),
        v if v == ExchangeType::Aggressive as u8 => "Aggressive Mode Handshake returned".to_string(),
        other => format!("UNKNOWN Mode Handshake returned ({other})"),
    };

    let message = if num_transforms == 1 {
        mode
    } else {
        format!("{mode} ({num_transforms} transforms)")
    };

    let next = PayloadType::try_from(generic.next_payload).unwrap_or(PayloadType::None);
    Ok((message, declared_len, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::params::{PROTO_ISAKMP, SITUATION_IDENTITY_ONLY};
    use zerocopy::network_endian::{U16, U32};
    use zerocopy::AsBytes;

    fn build_sa(next_payload: u8, num_transforms: u8) -> Vec<u8> {
        let generic = GenericPayloadHeader {
            next_payload,
            reserved: 0,
            payload_length: U16::new(MIN_LEN as u16),
        };
        let sa = SaHeader {
            doi: U32::new(1),
            situation: U32::new(SITUATION_IDENTITY_ONLY),
        };
        let proposal = ProposalHeader {
            proposal_number: 1,
            protocol_id: PROTO_ISAKMP,
            spi_size: 0,
            num_transforms,
        };
        let mut buf = Vec::new();
        buf.extend_from_slice(generic.as_bytes());
        buf.extend_from_slice(sa.as_bytes());
        buf.extend_from_slice(proposal.as_bytes());
        buf
    }

    #[test]
    fn main_mode_single_transform_has_no_count_suffix() {
        let buf = build_sa(0, 1);
        let (message, consumed, next) =
            summarize(&buf, ExchangeType::IdentityProtection as u8).unwrap();
        assert_eq!(message, "Main Mode Handshake returned");
        assert_eq!(consumed, MIN_LEN);
        assert_eq!(next, PayloadType::None);
    }

    #[test]
    fn aggressive_mode_multiple_transforms_has_count_suffix() {
        let buf = build_sa(0, 4);
        let (message, ..) = summarize(&buf, ExchangeType::Aggressive as u8).unwrap();
        assert_eq!(message, "Aggressive Mode Handshake returned (4 transforms)");
    }

    #[test]
    fn unknown_exchange_type_reports_raw_value() {
        let buf = build_sa(0, 1);
        let (message, ..) = summarize(&buf, 9).unwrap();
        assert_eq!(message, "UNKNOWN Mode Handshake returned (9)");
    }

    #[test]
    fn truncated_sa_reports_packet_too_short() {
        let buf = vec![0u8; 4];
        let err = summarize(&buf, ExchangeType::IdentityProtection as u8).unwrap_err();
        assert_eq!(err, "IKE Handshake returned (packet too short to decode)");
    }
}
