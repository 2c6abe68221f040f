//! # Digest Algorithms and Header Formats
//!
//! `DigestAlgorithm` names the hash function; `DigestFormat` names how the
//! hash is rendered into a header value. They are separate because the
//! multihash format is SHA-256 too, only tagged and encoded differently.

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// The hash algorithm behind a digest header value.
///
/// SHA-256 is the only supported algorithm. Header tags are matched after
/// lowercasing and removing hyphens ([`parse`](Self::parse)), so `SHA-256`
/// and `sha-256` resolve to [`DigestAlgorithm::Sha256`]. Callers creating
/// header values must name it exactly `sha256`
/// ([`from_identifier`](Self::from_identifier)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256, 32-byte digests.
    Sha256,
}

impl DigestAlgorithm {
    /// Resolve an algorithm named by a header tag, ignoring case and hyphens.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::UnsupportedAlgorithm` for anything that does
    /// not normalize to `sha256` (e.g. `sha512`, `hs2019`).
    pub fn parse(identifier: &str) -> Result<Self, DigestError> {
        match normalize_identifier(identifier).as_str() {
            "sha256" => Ok(Self::Sha256),
            _ => Err(DigestError::UnsupportedAlgorithm(identifier.to_string())),
        }
    }

    /// Resolve an exact algorithm identifier, as requested by a caller
    /// creating a header value. Only `sha256` is accepted; header tag
    /// spellings such as `SHA-256` are not.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::UnsupportedAlgorithm` for any other identifier.
    pub fn from_identifier(identifier: &str) -> Result<Self, DigestError> {
        match identifier {
            "sha256" => Ok(Self::Sha256),
            _ => Err(DigestError::UnsupportedAlgorithm(identifier.to_string())),
        }
    }

    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }

    /// Length in bytes of digests produced by this algorithm.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// How a digest is rendered into a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestFormat {
    /// `SHA-256=<base64>`: the raw digest in standard padded base64.
    Sha256,
    /// `mh=u<base64url>`: the digest wrapped as a multihash, multibase encoded.
    Multihash,
}

impl DigestFormat {
    /// Pick the format for a `use_multihash` flag.
    pub fn from_multihash_flag(use_multihash: bool) -> Self {
        if use_multihash {
            Self::Multihash
        } else {
            Self::Sha256
        }
    }

    /// The header tag written before the `=`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Multihash => "mh",
        }
    }
}

impl std::fmt::Display for DigestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lowercase an identifier and drop hyphens (`SHA-256` -> `sha256`).
pub fn normalize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
