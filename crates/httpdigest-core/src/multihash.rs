//! # SHA-256 Multihash
//!
//! A fixed 34-byte self-describing digest: function code `0x12`
//! (sha2-256), length byte `0x20` (32), then the digest. Variable-length
//! digests and other function codes are not supported.

use crate::error::DigestError;

/// Multihash function code for sha2-256.
pub const SHA256_CODE: u8 = 0x12;

/// Digest length byte for sha2-256.
pub const SHA256_LEN: u8 = 0x20;

/// Total encoded size: code byte + length byte + 32-byte digest.
pub const MULTIHASH_SHA256_SIZE: usize = 34;

/// A SHA-256 digest wrapped in the multihash layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multihash {
    digest: [u8; 32],
}

impl Multihash {
    /// Wrap a raw SHA-256 digest.
    pub fn sha256(digest: [u8; 32]) -> Self {
        Self { digest }
    }

    /// The wrapped 32-byte digest.
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Serialize to the 34-byte multihash layout.
    pub fn to_bytes(&self) -> [u8; MULTIHASH_SHA256_SIZE] {
        let mut out = [0u8; MULTIHASH_SHA256_SIZE];
        out[0] = SHA256_CODE;
        out[1] = SHA256_LEN;
        out[2..].copy_from_slice(&self.digest);
        out
    }

    /// Parse a 34-byte SHA-256 multihash.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::InvalidPayload` when the size, function code or
    /// length byte does not describe a SHA-256 digest.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DigestError> {
        if bytes.len() != MULTIHASH_SHA256_SIZE {
            return Err(DigestError::InvalidPayload(format!(
                "multihash must be {MULTIHASH_SHA256_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        if bytes[0] != SHA256_CODE {
            return Err(DigestError::InvalidPayload(format!(
                "unsupported multihash function code 0x{:02x}",
                bytes[0]
            )));
        }
        if bytes[1] != SHA256_LEN {
            return Err(DigestError::InvalidPayload(format!(
                "multihash length byte {} does not match sha2-256",
                bytes[1]
            )));
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&bytes[2..]);
        Ok(Self { digest })
    }
}
