//! Accumulates a sequence of Vendor ID payloads
//!
//! Unlike [`super::transform_set::TransformSetBuilder`], Vendor ID payloads
//! sit at the top level of the datagram alongside SA, Key Exchange, Nonce
//! and Identification, so this builder does not chain them itself: each
//! finalized buffer becomes its own entry in the list handed to
//! [`super::assembler::assemble`], which is the single authority for every
//! top-level payload's "next payload" field.

use crate::error::BuildError;
use crate::generator::vendor_id;

/// Accumulates Vendor ID payload buffers in append order
#[derive(Debug, Default)]
pub struct VendorIdSetBuilder {
    entries: Vec<Vec<u8>>,
}

impl VendorIdSetBuilder {
    /// Start an empty vendor ID set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one vendor ID payload wrapping `vendor_bytes`
    pub fn append(&mut self, vendor_bytes: &[u8]) {
        self.entries.push(vendor_id::build(vendor_bytes));
    }

    /// Consume the builder, returning the individual payload buffers in
    /// append order, ready to be spliced into an
    /// [`super::assembler::assemble`] payload list
    pub fn finalize(self) -> Result<Vec<Vec<u8>>, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::EmptyVendorIdSet);
        }
        Ok(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_an_error() {
        let set = VendorIdSetBuilder::new();
        assert!(matches!(set.finalize(), Err(BuildError::EmptyVendorIdSet)));
    }

    #[test]
    fn preserves_append_order() {
        let mut set = VendorIdSetBuilder::new();
        set.append(&[0x01]);
        set.append(&[0x02, 0x03]);
        let entries = set.finalize().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(&entries[0][4..], &[0x01]);
        assert_eq!(&entries[1][4..], &[0x02, 0x03]);
    }
}
