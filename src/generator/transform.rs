//! Transform payload construction (RFC 2408 §3.6, RFC 2409 Appendix A §5)
//!
//! Attribute order follows the original scanner's `make_trans`: the four
//! mandatory TV attributes first (encryption, hash, auth, group), then the
//! optional ones in a fixed order so two builds with identical parameters
//! are always byte-identical.

use crate::attribute::{build_tlv, build_tlv_u32, build_tv};
use crate::definitions::params::{
    AuthenticationMethod, EncryptionAlgorithm, GroupDescription, HashAlgorithm, KEY_IKE,
};
use crate::definitions::{GenericPayloadHeader, TransformHeader};
use zerocopy::network_endian::U16;
use zerocopy::AsBytes;

const ATTR_ENCRYPTION_ALGORITHM: u16 = 1;
const ATTR_HASH_ALGORITHM: u16 = 2;
const ATTR_AUTHENTICATION_METHOD: u16 = 3;
const ATTR_GROUP_DESCRIPTION: u16 = 4;
const ATTR_LIFE_TYPE: u16 = 11;
const ATTR_LIFE_DURATION: u16 = 12;
const ATTR_KEY_LENGTH: u16 = 14;
const ATTR_GSS_ID: u16 = 16384; // 0x4000, vendor extension, always TLV

const LIFE_TYPE_SECONDS: u16 = 1;
const LIFE_TYPE_KILOBYTES: u16 = 2;

/// The negotiable parameters of one Transform, mirroring the fields the
/// scanner lets a caller choose per phase-1 proposal
#[derive(Debug, Clone)]
pub struct TransformParams<'a> {
    /// Encryption algorithm (mandatory attribute)
    pub cipher: EncryptionAlgorithm,
    /// Key length in bits, only meaningful for variable-key ciphers
    pub key_length: Option<u16>,
    /// Hash algorithm (mandatory attribute)
    pub hash: HashAlgorithm,
    /// Authentication method (mandatory attribute)
    pub auth: AuthenticationMethod,
    /// Diffie-Hellman group (mandatory attribute)
    pub group: GroupDescription,
    /// SA lifetime in seconds, if the proposal should expire by time
    pub lifetime_seconds: Option<u32>,
    /// SA lifetime in kilobytes, if the proposal should expire by volume
    pub life_kilobytes: Option<u32>,
    /// Vendor-specific GSS ID attribute bytes, always emitted as a TLV
    pub gss_id: Option<&'a [u8]>,
}

/// Build one Transform payload body (not including the enclosing generic
/// header, which [`super::transform_set::TransformSetBuilder`] manages)
///
/// `transform_number` must be unique within the enclosing Proposal.
pub fn build(transform_number: u8, params: &TransformParams<'_>) -> Vec<u8> {
    let mut attrs = Vec::new();
    attrs.extend_from_slice(&build_tv(ATTR_ENCRYPTION_ALGORITHM, params.cipher as u16));
    attrs.extend_from_slice(&build_tv(ATTR_HASH_ALGORITHM, params.hash as u16));
    attrs.extend_from_slice(&build_tv(ATTR_AUTHENTICATION_METHOD, params.auth as u16));
    attrs.extend_from_slice(&build_tv(ATTR_GROUP_DESCRIPTION, params.group as u16));

    if let Some(key_length) = params.key_length {
        attrs.extend_from_slice(&build_tv(ATTR_KEY_LENGTH, key_length));
    }
    if let Some(seconds) = params.lifetime_seconds {
        attrs.extend_from_slice(&build_tv(ATTR_LIFE_TYPE, LIFE_TYPE_SECONDS));
        attrs.extend_from_slice(&build_tlv_u32(ATTR_LIFE_DURATION, seconds));
    }
    if let Some(kilobytes) = params.life_kilobytes {
        attrs.extend_from_slice(&build_tv(ATTR_LIFE_TYPE, LIFE_TYPE_KILOBYTES));
        attrs.extend_from_slice(&build_tlv_u32(ATTR_LIFE_DURATION, kilobytes));
    }
    if let Some(gss_id) = params.gss_id {
        attrs.extend_from_slice(&build_tlv(ATTR_GSS_ID, gss_id));
    }

    let header = TransformHeader {
        transform_number,
        transform_id: KEY_IKE,
        reserved: U16::new(0),
    };
    let body_len = core::mem::size_of::<GenericPayloadHeader>()
        + core::mem::size_of::<TransformHeader>()
        + attrs.len();
    let generic = GenericPayloadHeader {
        next_payload: 0, // placeholder, fixed up by TransformSetBuilder::finalize
        reserved: 0,
        payload_length: U16::new(body_len as u16),
    };

    let mut buf = Vec::with_capacity(body_len);
    buf.extend_from_slice(generic.as_bytes());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(&attrs);
    buf
}
