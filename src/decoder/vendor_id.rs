//! Summarizes a Vendor ID payload and matches it against known fingerprints
//!
//! Vendor ID bytes are usually an MD5 hash of a product string with no
//! public reverse mapping, so the only thing this decoder can say about one
//! with certainty is its hex encoding; matching it against a caller-supplied
//! pattern list is how a product name gets attached to that hex string.

use crate::definitions::params::PayloadType;
use crate::definitions::GenericPayloadHeader;
use zerocopy::FromBytes;

/// A known Vendor ID byte pattern and the product name to report on a match
#[derive(Debug, Copy, Clone)]
pub struct VidPattern<'a> {
    /// Product or implementation name to report
    pub name: &'a str,
    /// Bytes to match at the start of the Vendor ID payload body
    pub pattern: &'a [u8],
}

/// Summarize the Vendor ID payload at the start of `buf`
///
/// Patterns are tried in order; the first whose bytes match a prefix of the
/// payload body wins, matching the original scanner's stop-at-first-match
/// behavior.
pub fn summarize(buf: &[u8], patterns: &[VidPattern<'_>]) -> Result<(String, usize, PayloadType), String> {
    let too_short = || "VID (packet too short to decode)".to_string();

    let generic = GenericPayloadHeader::ref_from_prefix(buf).ok_or_else(too_short)?;
    let declared_len = generic.payload_length.get() as usize;
    let header_len = core::mem::size_of::<GenericPayloadHeader>();
    if declared_len < header_len || declared_len > buf.len() {
        return Err(too_short());
    }

    let body = &buf[header_len..declared_len];
    let mut message = format!("VID={}", hex::encode(body));

    if let Some(matched) = patterns.iter().find(|p| matches(body, p.pattern)) {
        message.push_str(&format!(" ({})", matched.name));
    }

    let next = PayloadType::try_from(generic.next_payload).unwrap_or(PayloadType::None);
    Ok((message, declared_len, next))
}

fn matches(body: &[u8], pattern: &[u8]) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let len = pattern.len().min(body.len());
    body[..len] == pattern[..len]
}
