//! Chains multiple Transform payloads into the buffer a Proposal embeds
//!
//! Transforms are nested inside a Proposal's body and never appear as their
//! own entry in [`super::assembler::assemble`]'s payload list, so this
//! builder - unlike [`super::vendor_id_set::VendorIdSetBuilder`] - owns
//! their "next payload" fixup itself instead of deferring it to the assembler.

use crate::definitions::params::PayloadType;
use crate::error::BuildError;
use crate::generator::transform;
use crate::generator::transform::TransformParams;

/// Accumulates Transform payloads, numbering them in append order and
/// chaining each to the next
#[derive(Debug, Default)]
pub struct TransformSetBuilder {
    buf: Vec<u8>,
    last_offset: Option<usize>,
    count: u8,
}

impl TransformSetBuilder {
    /// Start an empty transform set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transform built from `params`
    pub fn append(&mut self, params: TransformParams<'_>) {
        // the transform just appended is mid-chain until finalize() proves otherwise
        if let Some(offset) = self.last_offset {
            self.buf[offset] = PayloadType::Transform as u8;
        }
        self.count += 1;
        let offset = self.buf.len();
        self.buf.extend_from_slice(&transform::build(self.count, &params));
        self.last_offset = Some(offset);
    }

    /// Consume the builder, returning the concatenated transform bytes and
    /// the transform count, with the last transform's "next payload" field
    /// set to NONE
    pub fn finalize(mut self) -> Result<(Vec<u8>, u8), BuildError> {
        let Some(offset) = self.last_offset else {
            return Err(BuildError::EmptyTransformSet);
        };
        self.buf[offset] = PayloadType::None as u8;
        Ok((self.buf, self.count))
    }
}
