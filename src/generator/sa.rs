//! Security Association and Proposal payload construction (RFC 2408 §3.4, §3.5)
//!
//! This codec only ever negotiates a single proposal carrying a single
//! protocol (ISAKMP itself, phase 1), so the Proposal payload is folded into
//! the same function that builds the enclosing SA: there is never a reason
//! to vary proposal number, protocol-id or SPI independently of the SA around it.

use crate::definitions::params::{DomainOfInterpretation, PROTO_ISAKMP, SITUATION_IDENTITY_ONLY};
use crate::definitions::{GenericPayloadHeader, ProposalHeader, SaHeader};
use zerocopy::network_endian::U16;
use zerocopy::AsBytes;

/// Build a Security Association payload wrapping exactly one Proposal, which
/// in turn wraps the already-chained bytes of one or more Transforms
///
/// `transforms` is the buffer produced by
/// [`super::transform_set::TransformSetBuilder::finalize`], and `num_transforms`
/// is the count returned alongside it. Byte 0 of the returned buffer (this
/// payload's own "next payload" field) is left as a placeholder for
/// [`super::assembler::assemble`] to fill in.
pub fn build(transforms: &[u8], num_transforms: u8) -> Vec<u8> {
    let proposal_header = ProposalHeader {
        proposal_number: 1,
        protocol_id: PROTO_ISAKMP,
        spi_size: 0,
        num_transforms,
    };
    let proposal_len = core::mem::size_of::<GenericPayloadHeader>()
        + core::mem::size_of::<ProposalHeader>()
        + transforms.len();
    let proposal_generic = GenericPayloadHeader {
        next_payload: 0, // NONE: this codec never proposes more than one Proposal
        reserved: 0,
        payload_length: U16::new(proposal_len as u16),
    };

    let sa_header = SaHeader {
        doi: zerocopy::network_endian::U32::new(DomainOfInterpretation::Ipsec as u32),
        situation: zerocopy::network_endian::U32::new(SITUATION_IDENTITY_ONLY),
    };
    let sa_body_len = core::mem::size_of::<SaHeader>() + proposal_len;
    let sa_len = core::mem::size_of::<GenericPayloadHeader>() + sa_body_len;
    let sa_generic = GenericPayloadHeader {
        next_payload: 0, // placeholder, overwritten by the assembler
        reserved: 0,
        payload_length: U16::new(sa_len as u16),
    };

    let mut buf = Vec::with_capacity(sa_len);
    buf.extend_from_slice(sa_generic.as_bytes());
    buf.extend_from_slice(sa_header.as_bytes());
    buf.extend_from_slice(proposal_generic.as_bytes());
    buf.extend_from_slice(proposal_header.as_bytes());
    buf.extend_from_slice(transforms);
    buf
}
