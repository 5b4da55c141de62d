//! The transform attribute sub-codec (RFC 2409 §5.3)
//!
//! An attribute is either a 4-byte TV (type-value) pair, used when the
//! attribute-format bit (the top bit of the 16-bit type field) is set, or a
//! TLV (type-length-value) triple, used when that bit is clear. This module
//! keeps that distinction as its own small codec so the rest of the crate
//! never has to reason about the bit directly.

use crate::definitions::params::{AttributeType, UnparseableParameter};
use crate::definitions::{AttributeHeaderTlv, AttributeHeaderTv, FLAG_ATTRIBUTE_FORMAT};
use zerocopy::network_endian::U16;
use zerocopy::{AsBytes, FromBytes};

/// A single parsed transform attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// Fixed-length attribute (TV form)
    Tv {
        /// Attribute class
        attribute_type: Result<AttributeType, UnparseableParameter>,
        /// Attribute value
        value: u16,
    },
    /// Variable-length attribute (TLV form)
    Tlv {
        /// Attribute class
        attribute_type: Result<AttributeType, UnparseableParameter>,
        /// Attribute value bytes
        value: Vec<u8>,
    },
}

/// Build a TV-form attribute: type `0x8000 | class`, 2-byte value
pub fn build_tv(class: u16, value: u16) -> [u8; 4] {
    let header = AttributeHeaderTv {
        attribute_type: U16::new(class | FLAG_ATTRIBUTE_FORMAT),
        attribute_value: U16::new(value),
    };
    let mut buf = [0u8; 4];
    buf.copy_from_slice(header.as_bytes());
    buf
}

/// Build a TLV-form attribute: type `class` (top bit clear), 2-byte length,
/// then the raw value bytes
pub fn build_tlv(class: u16, value: &[u8]) -> Vec<u8> {
    let header = AttributeHeaderTlv {
        attribute_type: U16::new(class & !FLAG_ATTRIBUTE_FORMAT),
        attribute_length: U16::new(value.len() as u16),
    };
    let mut buf = Vec::with_capacity(4 + value.len());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(value);
    buf
}

/// Build the `life-duration` TLV attribute with a 4-byte big-endian value,
/// the only TLV shape this codec ever emits
pub fn build_tlv_u32(class: u16, value: u32) -> [u8; 8] {
    let mut buf = [0u8; 8];
    buf[..4].copy_from_slice(&build_tlv_header(class, 4));
    buf[4..].copy_from_slice(&value.to_be_bytes());
    buf
}

fn build_tlv_header(class: u16, length: u16) -> [u8; 4] {
    let header = AttributeHeaderTlv {
        attribute_type: U16::new(class & !FLAG_ATTRIBUTE_FORMAT),
        attribute_length: U16::new(length),
    };
    let mut buf = [0u8; 4];
    buf.copy_from_slice(header.as_bytes());
    buf
}

/// Parse a single attribute (TV or TLV) from the start of `buf`
///
/// Returns the parsed attribute and the number of bytes it consumed.
/// Never reads past `buf`.
pub fn parse(buf: &[u8]) -> Option<(Attribute, usize)> {
    let first_word = U16::ref_from_prefix(buf)?.get();
    let is_tv = first_word & FLAG_ATTRIBUTE_FORMAT == FLAG_ATTRIBUTE_FORMAT;
    let class = first_word & !FLAG_ATTRIBUTE_FORMAT;
    let attribute_type = AttributeType::try_from(class);

    if is_tv {
        let header = AttributeHeaderTv::ref_from_prefix(buf)?;
        Some((
            Attribute::Tv {
                attribute_type,
                value: header.attribute_value.get(),
            },
            core::mem::size_of::<AttributeHeaderTv>(),
        ))
    } else {
        let header = AttributeHeaderTlv::ref_from_prefix(buf)?;
        let header_len = core::mem::size_of::<AttributeHeaderTlv>();
        let value_len = header.attribute_length.get() as usize;
        let value = buf.get(header_len..header_len + value_len)?.to_vec();
        Some((Attribute::Tlv { attribute_type, value }, header_len + value_len))
    }
}
