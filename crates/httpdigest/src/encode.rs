//! # Digest Encoding
//!
//! Hashes normalized bytes and renders the digest for a header value.
//!
//! - `SHA-256` format: standard base64 (padded) of the 32-byte digest.
//! - `mh` format: the 34-byte sha2-256 multihash in base64url without
//!   padding, behind the multibase prefix `u`.
//!
//! [`decode_payload`] is the inverse, used to recover raw digests from
//! parsed header values.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use httpdigest_core::{DigestAlgorithm, DigestError, DigestFormat, Multihash, Sha256Hasher};

/// Multibase prefix for base64url without padding.
pub const MULTIBASE_BASE64URL: char = 'u';

/// A rendered digest: the header tag and the encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDigest {
    /// `SHA-256` or `mh`.
    pub tag: String,
    /// The encoded digest that follows `tag=`.
    pub encoded_payload: String,
}

impl std::fmt::Display for EncodedDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.tag, self.encoded_payload)
    }
}

/// Hashes bytes with an injected [`Sha256Hasher`] and encodes the result.
#[derive(Debug, Clone, Default)]
pub struct DigestEncoder<H> {
    hasher: H,
}

impl<H: Sha256Hasher> DigestEncoder<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// The injected hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Hash `bytes` with `algorithm` and encode under `format`.
    pub fn encode(
        &self,
        bytes: &[u8],
        algorithm: DigestAlgorithm,
        format: DigestFormat,
    ) -> EncodedDigest {
        let digest = match algorithm {
            DigestAlgorithm::Sha256 => self.hasher.sha256(bytes),
        };
        let encoded_payload = match format {
            DigestFormat::Sha256 => STANDARD.encode(digest),
            DigestFormat::Multihash => {
                let mh = Multihash::sha256(digest).to_bytes();
                format!("{MULTIBASE_BASE64URL}{}", URL_SAFE_NO_PAD.encode(mh))
            }
        };
        EncodedDigest {
            tag: format.tag().to_string(),
            encoded_payload,
        }
    }
}

/// Decode an encoded payload back to the raw SHA-256 digest.
///
/// # Errors
///
/// Returns `DigestError::InvalidPayload` if the payload is not valid
/// base64 / multibase, or does not hold a 32-byte SHA-256 digest.
pub fn decode_payload(
    format: DigestFormat,
    encoded_payload: &str,
) -> Result<[u8; 32], DigestError> {
    match format {
        DigestFormat::Sha256 => {
            let bytes = STANDARD
                .decode(encoded_payload)
                .map_err(|e| DigestError::InvalidPayload(format!("base64: {e}")))?;
            let expected = DigestAlgorithm::Sha256.digest_len();
            <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
                DigestError::InvalidPayload(format!(
                    "SHA-256 digest must be {expected} bytes, got {}",
                    bytes.len()
                ))
            })
        }
        DigestFormat::Multihash => {
            let encoded = encoded_payload
                .strip_prefix(MULTIBASE_BASE64URL)
                .ok_or_else(|| {
                    DigestError::InvalidPayload("missing multibase prefix 'u'".to_string())
                })?;
            let bytes = URL_SAFE_NO_PAD
                .decode(encoded)
                .map_err(|e| DigestError::InvalidPayload(format!("base64url: {e}")))?;
            Ok(*Multihash::from_bytes(&bytes)?.digest())
        }
    }
}
