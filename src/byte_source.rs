//! Injected randomness for Key Exchange and Nonce payload bodies
//!
//! The codec's purpose is fingerprinting, not key agreement, so the bytes
//! handed to [`crate::generator::key_exchange::build`] and
//! [`crate::generator::nonce::build`] never need to be cryptographically
//! strong - but they do need to be swappable for a fixed sequence in tests,
//! which is why this is a trait parameter rather than a direct call to
//! `rand::random`.

/// A source of pseudorandom bytes for payload bodies that don't need to be
/// authentic (Key Exchange, Nonce)
pub trait ByteSource {
    /// Fill `buf` with bytes
    fn fill(&mut self, buf: &mut [u8]);
}

/// Production [`ByteSource`] backed by `rand`
#[derive(Debug, Default)]
pub struct RngByteSource;

impl ByteSource for RngByteSource {
    fn fill(&mut self, buf: &mut [u8]) {
        use rand::RngCore;
        rand::rng().fill_bytes(buf);
    }
}

/// Deterministic [`ByteSource`] for tests: repeats a fixed byte sequence
#[derive(Debug, Clone)]
pub struct FixedByteSource {
    pattern: Vec<u8>,
    offset: usize,
}

impl FixedByteSource {
    /// Build a source that cycles through `pattern` forever
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        let pattern = pattern.into();
        assert!(!pattern.is_empty(), "pattern must not be empty");
        Self { pattern, offset: 0 }
    }
}

impl ByteSource for FixedByteSource {
    fn fill(&mut self, buf: &mut [u8]) {
        for slot in buf {
            *slot = self.pattern[self.offset];
            self.offset = (self.offset + 1) % self.pattern.len();
        }
    }
}
