//! # isakmp
//!
//! Low-level codec for ISAKMP (RFC 2408) phase-1 exchanges, i.e. IKEv1
//! Main Mode and Aggressive Mode as defined in RFC 2409 Appendix A.
//!
//! This crate builds bit-exact phase-1 datagrams from an SA proposal and
//! decodes inbound responses into a human-readable summary. It does not
//! perform real Diffie-Hellman key agreement, does not decrypt anything,
//! and knows nothing about IKEv2 - see [`decoder`] and [`generator`] for
//! the two halves of the codec.

#![warn(missing_docs, clippy::unwrap_used, clippy::expect_used)]

pub mod attribute;
pub mod byte_source;
pub mod decoder;
pub mod definitions;
pub mod error;
pub mod generator;

pub use zerocopy;
