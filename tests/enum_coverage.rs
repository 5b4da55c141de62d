//! Property-style coverage over every legal transform parameter value
//!
//! `EncryptionAlgorithm`, `HashAlgorithm`, `AuthenticationMethod` and
//! `GroupDescription` each derive `strum::EnumIter` so this can walk every
//! variant the codec is allowed to negotiate, matching the original
//! scanner's own `gen_v1_transforms` enumeration (`ikebuster/src/utils/gen_transforms.rs`)
//! instead of hand-picking a handful of representative values.

use isakmp::definitions::params::{
    AuthenticationMethod, EncryptionAlgorithm, GroupDescription, HashAlgorithm,
};
use isakmp::generator::transform::{self, TransformParams};
use strum::IntoEnumIterator;
use zerocopy::network_endian::U16;
use zerocopy::FromBytes;

#[test]
fn every_legal_combination_encodes_its_own_attribute_values() {
    for cipher in EncryptionAlgorithm::iter() {
        for hash in HashAlgorithm::iter() {
            for auth in AuthenticationMethod::iter() {
                for group in GroupDescription::iter() {
                    let params = TransformParams {
                        cipher,
                        key_length: None,
                        hash,
                        auth,
                        group,
                        lifetime_seconds: None,
                        life_kilobytes: None,
                        gss_id: None,
                    };
                    let buf = transform::build(1, &params);

                    // generic header(4) + transform header(4) + 4 mandatory TV attrs(4 each)
                    assert_eq!(buf.len(), 4 + 4 + 4 * 4);
                    assert_eq!(read_tv_value(&buf, 8), cipher as u16);
                    assert_eq!(read_tv_value(&buf, 12), hash as u16);
                    assert_eq!(read_tv_value(&buf, 16), auth as u16);
                    assert_eq!(read_tv_value(&buf, 20), group as u16);
                }
            }
        }
    }
}

/// Read the 2-byte value half of a 4-byte TV attribute starting at `offset`
fn read_tv_value(buf: &[u8], offset: usize) -> u16 {
    U16::ref_from_prefix(&buf[offset + 2..offset + 4]).unwrap().get()
}
