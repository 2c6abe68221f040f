//! # Header Value Parsing
//!
//! Splits a digest header value into tag and payload and validates the tag.
//! Parsing never hashes anything.
//!
//! ## Accepted Grammar
//!
//! ```text
//! header-value = tag "=" payload
//! tag          = sha256-hyphenated / sha256-compact / sha256-loose / multihash
//! payload      = bare-payload / colon-wrapped
//! colon-wrapped = ":" bare-payload ":"
//! ```
//!
//! Tags are compared case-insensitively with hyphens removed. Each
//! accepted form has a named rule in [`HeaderTag`] and [`PayloadSyntax`].
//! Colon-wrapped payloads are accepted here for compatibility with
//! structured-field style senders; the encoder never produces them.

use httpdigest_core::{normalize_identifier, DigestAlgorithm, DigestError, DigestFormat};

use crate::encode::decode_payload;

/// Encoded prefix shared by every SHA-256 multihash payload: multibase
/// `u`, then base64url of function code `0x12` and length `0x20`.
pub const MULTIHASH_SHA256_PREFIX: &str = "uEi";

/// Which tag rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTag {
    /// `SHA-256`, any case.
    Sha256Hyphenated,
    /// `sha256`, any case.
    Sha256Compact,
    /// Any other spelling that reads `sha256` once case and hyphens are
    /// ignored, e.g. `s-ha256` or `SHA2-56`.
    Sha256Loose,
    /// `mh`, any case.
    Multihash,
}

impl HeaderTag {
    /// The digest format this tag selects.
    pub fn format(&self) -> DigestFormat {
        match self {
            Self::Sha256Hyphenated | Self::Sha256Compact | Self::Sha256Loose => {
                DigestFormat::Sha256
            }
            Self::Multihash => DigestFormat::Multihash,
        }
    }
}

/// Which payload rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSyntax {
    /// The payload as produced by the encoder.
    Bare,
    /// The payload wrapped in a leading and trailing `:`.
    ColonWrapped,
}

/// A header value decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeaderValue {
    /// The tag exactly as it appeared before the `=`.
    pub tag: String,
    pub rule: HeaderTag,
    pub algorithm: DigestAlgorithm,
    /// The payload with any colon wrapping removed.
    pub encoded_payload: String,
    pub syntax: PayloadSyntax,
}

impl ParsedHeaderValue {
    /// The format implied by the tag.
    pub fn format(&self) -> DigestFormat {
        self.rule.format()
    }

    /// Decode the payload to the raw 32-byte SHA-256 digest.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::InvalidPayload` if the payload does not decode.
    pub fn digest_bytes(&self) -> Result<[u8; 32], DigestError> {
        decode_payload(self.format(), &self.encoded_payload)
    }
}

/// Parse a digest header value such as `SHA-256=<base64>` or `mh=u<base64url>`.
///
/// # Errors
///
/// - `MalformedHeaderValue` if there is no `=`.
/// - `UnsupportedEncoding` if an `mh` payload lacks the `uEi` prefix.
/// - `UnsupportedAlgorithm` if the tag names anything but SHA-256.
pub fn parse_header_value(header_value: &str) -> Result<ParsedHeaderValue, DigestError> {
    let (key, payload) = header_value.split_once('=').ok_or_else(|| {
        DigestError::MalformedHeaderValue(format!("missing '=' in {header_value:?}"))
    })?;

    let (encoded_payload, syntax) = match payload
        .strip_prefix(':')
        .and_then(|inner| inner.strip_suffix(':'))
    {
        Some(inner) => (inner, PayloadSyntax::ColonWrapped),
        None => (payload, PayloadSyntax::Bare),
    };

    let rule = if normalize_identifier(key) == "mh" {
        if !encoded_payload.starts_with(MULTIHASH_SHA256_PREFIX) {
            return Err(DigestError::UnsupportedEncoding(format!(
                "multihash payload must start with {MULTIHASH_SHA256_PREFIX:?}"
            )));
        }
        HeaderTag::Multihash
    } else {
        DigestAlgorithm::parse(key)?;
        if key.eq_ignore_ascii_case("sha-256") {
            HeaderTag::Sha256Hyphenated
        } else if key.eq_ignore_ascii_case("sha256") {
            HeaderTag::Sha256Compact
        } else {
            HeaderTag::Sha256Loose
        }
    };

    Ok(ParsedHeaderValue {
        tag: key.to_string(),
        rule,
        algorithm: DigestAlgorithm::Sha256,
        encoded_payload: encoded_payload.to_string(),
        syntax,
    })
}
