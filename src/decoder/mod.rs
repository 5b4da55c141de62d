//! Walks an inbound phase-1 datagram and reduces it to a flat, ordered list
//! of human-readable summary fragments
//!
//! This mirrors the original scanner's reporting shape directly: one string
//! per payload of interest, not a parsed struct tree. Only Security
//! Association, Notification and Vendor ID payloads produce a fragment;
//! every other payload kind is skipped by its declared length so the walk
//! can continue past it.

pub mod notify;
pub mod sa;
pub mod vendor_id;

use crate::definitions::params::PayloadType;
use crate::definitions::{GenericPayloadHeader, Header};
use log::warn;
pub use vendor_id::VidPattern;
use zerocopy::FromBytes;

/// Result of walking one datagram: the raw exchange-type byte from the
/// header (if the header itself was readable) and the ordered summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Raw exchange-type byte from the ISAKMP header
    pub exchange_type: Option<u8>,
    /// Human-readable fragments, one per SA/Notify/Vendor ID payload seen
    pub summary: Vec<String>,
}

/// Decode one inbound datagram into a [`DecodeOutcome`]
///
/// `vid_patterns` is checked, in order, against every Vendor ID payload
/// encountered; the first match wins. Never panics, regardless of how the
/// bytes are malformed or truncated.
pub fn decode(bytes: &[u8], vid_patterns: &[VidPattern<'_>]) -> DecodeOutcome {
    let Some(header) = Header::ref_from_prefix(bytes) else {
        return DecodeOutcome::default();
    };

    if header.length.get() as usize != bytes.len() {
        warn!("Buffer length does not match header length");
    }

    let mut outcome = DecodeOutcome {
        exchange_type: Some(header.exchange_type),
        summary: Vec::new(),
    };

    let mut offset = core::mem::size_of::<Header>();
    let mut next = header.next_payload;

    loop {
        let Ok(kind) = PayloadType::try_from(next) else {
            break;
        };
        if kind == PayloadType::None {
            break;
        }
        let Some(remaining) = bytes.get(offset..) else {
            break;
        };

        match kind {
            PayloadType::SecurityAssociation => match sa::summarize(remaining, header.exchange_type) {
                Ok((message, consumed, next_kind)) => {
                    outcome.summary.push(message);
                    offset += consumed;
                    next = next_kind as u8;
                }
                Err(message) => {
                    outcome.summary.push(message);
                    break;
                }
            },
            PayloadType::Notification => match notify::summarize(remaining) {
                Ok((message, consumed, next_kind)) => {
                    outcome.summary.push(message);
                    offset += consumed;
                    next = next_kind as u8;
                }
                Err(message) => {
                    outcome.summary.push(message);
                    break;
                }
            },
            PayloadType::VendorID => match vendor_id::summarize(remaining, vid_patterns) {
                Ok((message, consumed, next_kind)) => {
                    outcome.summary.push(message);
                    offset += consumed;
                    next = next_kind as u8;
                }
                Err(message) => {
                    outcome.summary.push(message);
                    break;
                }
            },
            _ => {
                warn!("Unknown payload type ignored: {kind:?}");
                match skip(remaining) {
                    Some((consumed, next_kind)) => {
                        offset += consumed;
                        next = next_kind as u8;
                    }
                    None => break,
                }
            }
        }
    }

    outcome
}

/// Advance past a payload kind this decoder has no fragment for, using its
/// own declared length; returns `None` if the generic header or declared
/// length doesn't fit in what's left of the buffer
fn skip(buf: &[u8]) -> Option<(usize, PayloadType)> {
    let generic = GenericPayloadHeader::ref_from_prefix(buf)?;
    let len = generic.payload_length.get() as usize;
    if len < core::mem::size_of::<GenericPayloadHeader>() || len > buf.len() {
        return None;
    }
    let next = PayloadType::try_from(generic.next_payload).unwrap_or(PayloadType::None);
    Some((len, next))
}
