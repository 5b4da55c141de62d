//! End-to-end build/decode scenarios, exercising both halves of the codec
//! against the exact byte layouts and summary strings the original scanner
//! produced for the same inputs.

use isakmp::byte_source::FixedByteSource;
use isakmp::decoder::{decode, VidPattern};
use isakmp::definitions::params::{
    AuthenticationMethod, EncryptionAlgorithm, ExchangeType, GroupDescription, HashAlgorithm, PayloadType,
};
use isakmp::generator::assembler::assemble;
use isakmp::generator::sa;
use isakmp::generator::transform::TransformParams;
use isakmp::generator::transform_set::TransformSetBuilder;
use isakmp::generator::vendor_id;

const INITIATOR_COOKIE: u64 = 0xDEADBEEF_DEADBEEF;

#[test]
fn s1_main_mode_single_transform_no_lifetimes() {
    let mut transforms = TransformSetBuilder::new();
    transforms.append(TransformParams {
        cipher: EncryptionAlgorithm::TripleDesCbc,
        key_length: None,
        hash: HashAlgorithm::Sha1,
        auth: AuthenticationMethod::PreSharedKey,
        group: GroupDescription::Modp1024,
        lifetime_seconds: None,
        life_kilobytes: None,
        gss_id: None,
    });
    let (transform_bytes, count) = transforms.finalize().unwrap();
    assert_eq!(count, 1);
    let sa_payload = sa::build(&transform_bytes, count);

    let datagram = assemble(
        ExchangeType::IdentityProtection,
        INITIATOR_COOKIE,
        &[(PayloadType::SecurityAssociation, sa_payload)],
    )
    .unwrap();

    assert_eq!(datagram.len(), 28 + 8 + 4 + 4 + (4 + 4 + 4 * 4));
    assert_eq!(&datagram[0..8], &INITIATOR_COOKIE.to_be_bytes());
    assert_eq!(datagram[16], PayloadType::SecurityAssociation as u8); // next payload in header

    let sa_offset = 28;
    assert_eq!(datagram[sa_offset], 0); // SA is the last (only) top-level payload
    let proposal_offset = sa_offset + 4 + 8;
    assert_eq!(datagram[proposal_offset + 3], 1); // num_transforms
    let transform_offset = proposal_offset + 4;
    assert_eq!(datagram[transform_offset], 0); // transform's own next, NONE
    assert_eq!(datagram[transform_offset + 5], isakmp::definitions::params::KEY_IKE);

    let attrs_offset = transform_offset + 8;
    assert_eq!(&datagram[attrs_offset..attrs_offset + 4], &[0x80, 0x01, 0x00, 0x05]);
    assert_eq!(&datagram[attrs_offset + 4..attrs_offset + 8], &[0x80, 0x02, 0x00, 0x02]);
    assert_eq!(&datagram[attrs_offset + 8..attrs_offset + 12], &[0x80, 0x03, 0x00, 0x01]);
    assert_eq!(&datagram[attrs_offset + 12..attrs_offset + 16], &[0x80, 0x04, 0x00, 0x02]);

    let outcome = decode(&datagram, &[]);
    assert_eq!(outcome.exchange_type, Some(ExchangeType::IdentityProtection as u8));
    assert_eq!(outcome.summary, vec!["Main Mode Handshake returned".to_string()]);
}

#[test]
fn s2_aggressive_mode_keylen_lifetime_and_vid() {
    let mut transforms = TransformSetBuilder::new();
    transforms.append(TransformParams {
        cipher: EncryptionAlgorithm::AesCbc,
        key_length: Some(128),
        hash: HashAlgorithm::Sha1,
        auth: AuthenticationMethod::PreSharedKey,
        group: GroupDescription::Modp1024,
        lifetime_seconds: Some(28800),
        life_kilobytes: None,
        gss_id: None,
    });
    let (transform_bytes, count) = transforms.finalize().unwrap();
    let sa_payload = sa::build(&transform_bytes, count);

    let vid_bytes = hex_decode("4048b7d56ebce88525e7de7f00d6c2d3");
    let vid_payload = vendor_id::build(&vid_bytes);

    let datagram = assemble(
        ExchangeType::Aggressive,
        INITIATOR_COOKIE,
        &[
            (PayloadType::SecurityAssociation, sa_payload),
            (PayloadType::VendorID, vid_payload),
        ],
    )
    .unwrap();

    let patterns = [VidPattern {
        name: "MS NT5 ISAKMPOAKLEY",
        pattern: &vid_bytes,
    }];
    let outcome = decode(&datagram, &patterns);

    assert!(outcome.summary[0].starts_with("Aggressive Mode Handshake returned"));
    assert_eq!(
        outcome.summary[1],
        "VID=4048b7d56ebce88525e7de7f00d6c2d3 (MS NT5 ISAKMPOAKLEY)"
    );
}

#[test]
fn s3_notify_no_proposal_chosen() {
    let datagram = build_notify_datagram(ExchangeType::IdentityProtection, 14, &[]);
    let outcome = decode(&datagram, &[]);
    assert_eq!(outcome.summary, vec!["Notify message 14 (NO-PROPOSAL-CHOSEN)".to_string()]);
}

#[test]
fn s4_checkpoint_firewall1_notify() {
    let datagram = build_notify_datagram(ExchangeType::IdentityProtection, 9101, b"Firewall-1 NG-AI");
    let outcome = decode(&datagram, &[]);
    assert_eq!(
        outcome.summary,
        vec!["Notify message 9101 [Checkpoint Firewall-1 4.x or NG Base] (Firewall-1 NG-AI)".to_string()]
    );
}

#[test]
fn s5_malformed_truncated_proposal() {
    // SA generic header declares a length that reaches past the datagram.
    let mut datagram = vec![0u8; 28];
    datagram[16] = PayloadType::SecurityAssociation as u8; // header.next_payload
    datagram.extend_from_slice(&[0x00, 0x00, 0x00, 0x40]); // next=0, reserved=0, length=64 (lies)
    datagram.extend_from_slice(&[0u8; 8]); // truncated SA header, nowhere near 64 bytes total

    let outcome = decode(&datagram, &[]);
    assert_eq!(
        outcome.summary,
        vec!["IKE Handshake returned (packet too short to decode)".to_string()]
    );
}

#[test]
fn s6_multiple_transforms_reports_count() {
    let mut transforms = TransformSetBuilder::new();
    for _ in 0..3 {
        transforms.append(TransformParams {
            cipher: EncryptionAlgorithm::TripleDesCbc,
            key_length: None,
            hash: HashAlgorithm::Sha1,
            auth: AuthenticationMethod::PreSharedKey,
            group: GroupDescription::Modp1024,
            lifetime_seconds: None,
            life_kilobytes: None,
            gss_id: None,
        });
    }
    let (transform_bytes, count) = transforms.finalize().unwrap();
    assert_eq!(count, 3);
    let sa_payload = sa::build(&transform_bytes, count);

    let datagram = assemble(
        ExchangeType::IdentityProtection,
        INITIATOR_COOKIE,
        &[(PayloadType::SecurityAssociation, sa_payload)],
    )
    .unwrap();

    let outcome = decode(&datagram, &[]);
    assert_eq!(
        outcome.summary,
        vec!["Main Mode Handshake returned (3 transforms)".to_string()]
    );
}

#[test]
fn key_exchange_and_nonce_use_injected_byte_source() {
    let mut source = FixedByteSource::new(vec![0x11, 0x22, 0x33, 0x44]);
    let ke = isakmp::generator::key_exchange::build(128, &mut source).unwrap();
    let nonce = isakmp::generator::nonce::build(16, &mut source);
    assert_eq!(ke.len(), 4 + 128);
    assert_eq!(nonce.len(), 4 + 16);
}

fn build_notify_datagram(exchange_type: ExchangeType, msg_type: u16, data: &[u8]) -> Vec<u8> {
    let mut datagram = vec![0u8; 28];
    datagram[16] = PayloadType::Notification as u8;
    datagram[18] = exchange_type as u8;

    let total_len = 4 + 8 + data.len();
    datagram.extend_from_slice(&[0x00, 0x00]); // next=NONE, reserved
    datagram.extend_from_slice(&(total_len as u16).to_be_bytes());
    datagram.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // doi
    datagram.extend_from_slice(&[0x01, 0x00]); // protocol_id, spi_size
    datagram.extend_from_slice(&msg_type.to_be_bytes());
    datagram.extend_from_slice(data);

    let datagram_len = datagram.len() as u32;
    datagram[24..28].copy_from_slice(&datagram_len.to_be_bytes());
    datagram
}

fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}
