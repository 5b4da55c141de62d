//! Errors produced by the builder side of the codec

use thiserror::Error;

/// Failure while building a payload or an assembled datagram
///
/// Build-side errors are fatal to the call that produced them: no partial
/// buffer is ever returned to the caller.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BuildError {
    #[error("key exchange body length must be a multiple of 4, got {0}")]
    KeyExchangeLengthNotMultipleOf4(usize),

    #[error("a message cannot carry more than 255 payloads")]
    TooManyPayloads,

    #[error("a proposal must carry at least one transform before finalizing")]
    EmptyTransformSet,

    #[error("a vendor ID chain must carry at least one entry before finalizing")]
    EmptyVendorIdSet,

    #[error("SPI is too long to encode in a single byte: {0} bytes")]
    SpiTooLong(usize),
}
