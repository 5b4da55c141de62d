//! Summarizes a Notification payload (RFC 2408 §3.14.1)
//!
//! Notify message types 1-30 name a standard condition; type 9101 is a
//! long-standing Checkpoint Firewall-1 4.x/NG vendor extension that carries
//! a printable status string instead of an empty body, and everything else
//! is an unknown type this decoder doesn't try to interpret further.

use crate::definitions::params::PayloadType;
use crate::definitions::{GenericPayloadHeader, NotifyHeader};
use zerocopy::FromBytes;

const CHECKPOINT_FIREWALL1_NOTIFY: u16 = 9101;

/// RFC 2408 §3.14.1 Notify Message Types, indexed by their wire value (1-30)
const NOTIFY_MESSAGES: [&str; 31] = [
    "UNSPECIFIED",
    "INVALID-PAYLOAD-TYPE",
    "DOI-NOT-SUPPORTED",
    "SITUATION-NOT-SUPPORTED",
    "INVALID-COOKIE",
    "INVALID-MAJOR-VERSION",
    "INVALID-MINOR-VERSION",
    "INVALID-EXCHANGE-TYPE",
    "INVALID-FLAGS",
    "INVALID-MESSAGE-ID",
    "INVALID-PROTOCOL-ID",
    "INVALID-SPI",
    "INVALID-TRANSFORM-ID",
    "ATTRIBUTES-NOT-SUPPORTED",
    "NO-PROPOSAL-CHOSEN",
    "BAD-PROPOSAL-SYNTAX",
    "PAYLOAD-MALFORMED",
    "INVALID-KEY-INFORMATION",
    "INVALID-ID-INFORMATION",
    "INVALID-CERT-ENCODING",
    "INVALID-CERTIFICATE",
    "CERT-TYPE-UNSUPPORTED",
    "INVALID-CERT-AUTHORITY",
    "INVALID-HASH-INFORMATION",
    "AUTHENTICATION-FAILED",
    "INVALID-SIGNATURE",
    "ADDRESS-NOTIFICATION",
    "NOTIFY-SA-LIFETIME",
    "CERTIFICATE-UNAVAILABLE",
    "UNSUPPORTED-EXCHANGE-TYPE",
    "UNEQUAL-PAYLOAD-LENGTHS",
];

const MIN_LEN: usize = core::mem::size_of::<GenericPayloadHeader>() + core::mem::size_of::<NotifyHeader>();

/// Summarize the Notification payload at the start of `buf`
pub fn summarize(buf: &[u8]) -> Result<(String, usize, PayloadType), String> {
    let too_short = || "Notify message (packet too short to decode)".to_string();

    let generic = GenericPayloadHeader::ref_from_prefix(buf).ok_or_else(too_short)?;
    let declared_len = generic.payload_length.get() as usize;
    if declared_len < MIN_LEN || declared_len > buf.len() {
        return Err(too_short());
    }

    let header_len = core::mem::size_of::<GenericPayloadHeader>();
    let notify_header = NotifyHeader::ref_from_prefix(&buf[header_len..]).ok_or_else(too_short)?;
    let msg_type = notify_header.notify_message_type.get();
    let spi_len = notify_header.spi_size as usize;
    let data_offset = MIN_LEN + spi_len;
    if data_offset > declared_len {
        return Err(too_short());
    }
    let data = &buf[data_offset..declared_len];

    let message = if msg_type == CHECKPOINT_FIREWALL1_NOTIFY {
        format!(
            "Notify message {msg_type} [Checkpoint Firewall-1 4.x or NG Base] ({})",
            printable(data)
        )
    } else if let Some(name) = NOTIFY_MESSAGES.get(msg_type as usize) {
        format!("Notify message {msg_type} ({name})")
    } else {
        format!("Notify message {msg_type} (UNKNOWN MESSAGE TYPE)")
    };

    let next = PayloadType::try_from(generic.next_payload).unwrap_or(PayloadType::None);
    Ok((message, declared_len, next))
}

/// Render notification data as a printable string, substituting `.` for any
/// non-printable byte
fn printable(data: &[u8]) -> String {
    data.iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect()
}
