//! Closed parameter sets defined by RFC 2407 / RFC 2408 / RFC 2409 Appendix A
//!
//! Every enum here is `#[repr(u8)]` or `#[repr(u16)]` and parses from the
//! wire via `TryFrom`. Values outside the table are not an error as far as
//! the wire format is concerned (RFC 2408 deliberately reserves ranges for
//! future and private use) so parsing failures are reported through
//! [`UnparseableParameter`] rather than folded into the decoder's own
//! error type.

/// A parameter value read off the wire fell into a reserved, unassigned,
/// or private-use range instead of naming a known variant
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnparseableParameter {
    /// Reserved by the RFC, must not appear on the wire
    Reserved,
    /// Not assigned to any known standard
    Unassigned,
    /// Reserved for private, vendor-specific use
    PrivateUse,
}

/// Kind of the "next payload" / generic payload discriminator (RFC 2408 §3.1)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PayloadType {
    None = 0,
    SecurityAssociation = 1,
    Proposal = 2,
    Transform = 3,
    KeyExchange = 4,
    Identification = 5,
    Certificate = 6,
    CertificateRequest = 7,
    Hash = 8,
    Signature = 9,
    Nonce = 10,
    Notification = 11,
    Delete = 12,
    VendorID = 13,
}

impl TryFrom<u8> for PayloadType {
    type Error = UnparseableParameter;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PayloadType::None),
            1 => Ok(PayloadType::SecurityAssociation),
            2 => Ok(PayloadType::Proposal),
            3 => Ok(PayloadType::Transform),
            4 => Ok(PayloadType::KeyExchange),
            5 => Ok(PayloadType::Identification),
            6 => Ok(PayloadType::Certificate),
            7 => Ok(PayloadType::CertificateRequest),
            8 => Ok(PayloadType::Hash),
            9 => Ok(PayloadType::Signature),
            10 => Ok(PayloadType::Nonce),
            11 => Ok(PayloadType::Notification),
            12 => Ok(PayloadType::Delete),
            13 => Ok(PayloadType::VendorID),
            14..=127 => Err(UnparseableParameter::Unassigned),
            128..=255 => Err(UnparseableParameter::PrivateUse),
        }
    }
}

/// ISAKMP phase-1 exchange type (RFC 2408 §3.1)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ExchangeType {
    Base = 1,
    /// Main Mode
    IdentityProtection = 2,
    AuthenticationOnly = 3,
    /// Aggressive Mode
    Aggressive = 4,
    Informational = 5,
}

impl ExchangeType {
    /// The raw wire value, also used verbatim in the decoder's
    /// "UNKNOWN Mode Handshake returned (n)" fallback message
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Domain of Interpretation (RFC 2407); this codec only ever negotiates IPsec
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum DomainOfInterpretation {
    Ipsec = 1,
}

/// RFC 2407 §4.4.1 IPsec Situation bitmask; this codec only ever proposes
/// `SIT_IDENTITY_ONLY`
pub const SITUATION_IDENTITY_ONLY: u32 = 1;

/// Encryption algorithm transform ID (RFC 2409 Appendix A)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum EncryptionAlgorithm {
    DesCbc = 1,
    IdeaCbc = 2,
    BlowfishCbc = 3,
    Rc5R16B64Cbc = 4,
    TripleDesCbc = 5,
    CastCbc = 6,
    AesCbc = 7,
}

impl TryFrom<u16> for EncryptionAlgorithm {
    type Error = UnparseableParameter;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::DesCbc),
            2 => Ok(Self::IdeaCbc),
            3 => Ok(Self::BlowfishCbc),
            4 => Ok(Self::Rc5R16B64Cbc),
            5 => Ok(Self::TripleDesCbc),
            6 => Ok(Self::CastCbc),
            7 => Ok(Self::AesCbc),
            _ => Err(UnparseableParameter::Unassigned),
        }
    }
}

/// Hash algorithm transform ID (RFC 2409 Appendix A)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum HashAlgorithm {
    Md5 = 1,
    Sha1 = 2,
    Tiger = 3,
    Sha2_256 = 4,
    Sha2_384 = 5,
    Sha2_512 = 6,
}

impl TryFrom<u16> for HashAlgorithm {
    type Error = UnparseableParameter;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Md5),
            2 => Ok(Self::Sha1),
            3 => Ok(Self::Tiger),
            4 => Ok(Self::Sha2_256),
            5 => Ok(Self::Sha2_384),
            6 => Ok(Self::Sha2_512),
            _ => Err(UnparseableParameter::Unassigned),
        }
    }
}

/// Authentication method transform ID (RFC 2409 Appendix A)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum AuthenticationMethod {
    PreSharedKey = 1,
    DssSignature = 2,
    RsaSignature = 3,
    RsaEncryption = 4,
    RevisedRsaEncryption = 5,
}

impl TryFrom<u16> for AuthenticationMethod {
    type Error = UnparseableParameter;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::PreSharedKey),
            2 => Ok(Self::DssSignature),
            3 => Ok(Self::RsaSignature),
            4 => Ok(Self::RsaEncryption),
            5 => Ok(Self::RevisedRsaEncryption),
            _ => Err(UnparseableParameter::Unassigned),
        }
    }
}

/// Diffie-Hellman group description transform ID (RFC 2409 Appendix A, RFC 3526)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum GroupDescription {
    Modp768 = 1,
    Modp1024 = 2,
    Ec2N155 = 3,
    Ec2N185 = 4,
    Modp1536 = 5,
    Modp2048 = 14,
    Modp3072 = 15,
    Modp4096 = 16,
    Modp6144 = 17,
    Modp8192 = 18,
}

impl TryFrom<u16> for GroupDescription {
    type Error = UnparseableParameter;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Modp768),
            2 => Ok(Self::Modp1024),
            3 => Ok(Self::Ec2N155),
            4 => Ok(Self::Ec2N185),
            5 => Ok(Self::Modp1536),
            14 => Ok(Self::Modp2048),
            15 => Ok(Self::Modp3072),
            16 => Ok(Self::Modp4096),
            17 => Ok(Self::Modp6144),
            18 => Ok(Self::Modp8192),
            _ => Err(UnparseableParameter::Unassigned),
        }
    }
}

/// SA Life Type attribute value (RFC 2409 Appendix A)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum LifeType {
    Seconds = 1,
    Kilobytes = 2,
}

/// Transform attribute class (RFC 2409 Appendix A), i.e. the 15-bit value
/// once the attribute-format bit is stripped off
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum AttributeType {
    EncryptionAlgorithm = 1,
    HashAlgorithm = 2,
    AuthenticationMethod = 3,
    GroupDescription = 4,
    GroupType = 5,
    GroupPrime = 6,
    GroupGeneratorOne = 7,
    GroupGeneratorTwo = 8,
    GroupCurveA = 9,
    GroupCurveB = 10,
    LifeType = 11,
    LifeDuration = 12,
    Prf = 13,
    KeyLength = 14,
    FieldSize = 15,
    GroupOrder = 16,
}

impl TryFrom<u16> for AttributeType {
    type Error = UnparseableParameter;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::EncryptionAlgorithm),
            2 => Ok(Self::HashAlgorithm),
            3 => Ok(Self::AuthenticationMethod),
            4 => Ok(Self::GroupDescription),
            5 => Ok(Self::GroupType),
            6 => Ok(Self::GroupPrime),
            7 => Ok(Self::GroupGeneratorOne),
            8 => Ok(Self::GroupGeneratorTwo),
            9 => Ok(Self::GroupCurveA),
            10 => Ok(Self::GroupCurveB),
            11 => Ok(Self::LifeType),
            12 => Ok(Self::LifeDuration),
            13 => Ok(Self::Prf),
            14 => Ok(Self::KeyLength),
            15 => Ok(Self::FieldSize),
            16 => Ok(Self::GroupOrder),
            _ => Err(UnparseableParameter::Unassigned),
        }
    }
}

/// Transform ID for the ISAKMP protocol itself (RFC 2409 §5), the only
/// transform-id this codec ever emits or expects
pub const KEY_IKE: u8 = 1;

/// Protocol identifier for ISAKMP phase-1 proposals (RFC 2407 §4.4.1)
pub const PROTO_ISAKMP: u8 = 1;
