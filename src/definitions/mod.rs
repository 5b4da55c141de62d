//! Network-level header structs for each part of an ISAKMP phase-1 datagram
//!
//! Every struct here is `#[repr(C, packed)]` with `zerocopy`'s `FromBytes` /
//! `AsBytes` / `Unaligned` derives, the same approach the protocol's IKEv2
//! sibling module uses: no raw pointer casts, no manual byte-shuffling, and
//! `ref_from_prefix` turns an out-of-bounds read into an `Option::None`
//! instead of undefined behaviour.

pub mod params;

use zerocopy::network_endian::{U16, U32, U64};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

/// ISAKMP fixed header (RFC 2408 §3.1), 28 bytes
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct Header {
    /// Cookie generated by the initiator
    pub initiator_cookie: U64,
    /// Cookie generated by the responder, zero until the responder replies
    pub responder_cookie: U64,
    /// Type of the first payload following this header
    pub next_payload: u8,
    /// High nibble = major version, low nibble = minor version; always 0x10 here
    pub version: u8,
    /// Exchange type, see [params::ExchangeType]
    pub exchange_type: u8,
    /// Bit flags (encryption, commit, authentication-only); always 0 for our builds
    pub flags: u8,
    /// Zero in phase 1
    pub message_id: U32,
    /// Total datagram length in bytes, including this header
    pub length: U32,
}

/// Generic payload header prefixing every chained payload (RFC 2408 §3.2), 4 bytes
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct GenericPayloadHeader {
    /// Type of the payload following this one in the chain
    pub next_payload: u8,
    /// Must be zero
    pub reserved: u8,
    /// Length of this payload, including this 4-byte header
    pub payload_length: U16,
}

/// Static part of a Security Association payload body (RFC 2408 §3.4), after
/// the generic header: DOI plus the fixed 4-byte IPsec situation
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct SaHeader {
    /// Domain of interpretation, see [params::DomainOfInterpretation]
    pub doi: U32,
    /// DOI-specific situation, see [params::SITUATION_IDENTITY_ONLY]
    pub situation: U32,
}

/// Static part of a Proposal payload body (RFC 2408 §3.5), before the SPI
/// and the transform chain; this codec always uses an empty SPI
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct ProposalHeader {
    /// Proposal number, fixed at 1 in this codec (only one proposal per SA)
    pub proposal_number: u8,
    /// Protocol-id, see [params::PROTO_ISAKMP]
    pub protocol_id: u8,
    /// Size in bytes of the SPI that follows this header; always 0 in phase 1
    pub spi_size: u8,
    /// Number of Transform payloads following
    pub num_transforms: u8,
}

/// Static part of a Transform payload body (RFC 2408 §3.6), before the
/// variable-length attribute list
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct TransformHeader {
    /// Transform number, unique within the enclosing proposal
    pub transform_number: u8,
    /// Transform id, see [params::KEY_IKE]
    pub transform_id: u8,
    /// Must be zero
    pub reserved: U16,
}

/// Static part of an Identification payload body (RFC 2407 §4.6.2), before
/// the identity bytes
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct IdentificationHeader {
    /// ID type (IPv4 address, FQDN, user FQDN, ...)
    pub id_type: u8,
    /// DOI-specific protocol ID, UDP (17) for IKE
    pub protocol_id: u8,
    /// DOI-specific port, 500 (IKE) in big-endian
    pub port: U16,
}

/// Static part of a Notification payload body (RFC 2408 §3.14), before the
/// SPI and notification data
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct NotifyHeader {
    /// Domain of interpretation
    pub doi: U32,
    /// Protocol this notification concerns
    pub protocol_id: u8,
    /// Size in bytes of the SPI that follows this header
    pub spi_size: u8,
    /// Notify message type, see the static RFC 2408 table in [crate::decoder::notify]
    pub notify_message_type: U16,
}

/// Fixed-length (TV) form of a transform attribute header (RFC 2409 §5.3)
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct AttributeHeaderTv {
    /// Attribute class with the attribute-format bit (0x8000) set
    pub attribute_type: U16,
    /// Attribute value
    pub attribute_value: U16,
}

/// Variable-length (TLV) form of a transform attribute header (RFC 2409 §5.3)
#[derive(Debug, FromBytes, FromZeroes, AsBytes, Unaligned, Copy, Clone)]
#[repr(C, packed)]
pub struct AttributeHeaderTlv {
    /// Attribute class with the attribute-format bit (0x8000) clear
    pub attribute_type: U16,
    /// Length in bytes of the value that follows this header
    pub attribute_length: U16,
}

/// The attribute-format bit: set means TV (fixed 2-byte value), clear means TLV
pub const FLAG_ATTRIBUTE_FORMAT: u16 = 0x8000;
