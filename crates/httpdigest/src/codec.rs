//! # Digest Codec
//!
//! Creates digest header values for message bodies and verifies header
//! values against freshly supplied bodies.
//!
//! Creation: input -> normalize -> SHA-256 -> encode -> `tag=payload`.
//! Verification: header -> parse -> recompute with the parsed format ->
//! compare payload strings.
//!
//! `create_header_value` returns every failure to the caller.
//! `verify_header_value` never fails: errors become a negative
//! [`VerificationResult`] carrying the error.

use serde::{Deserialize, Serialize};

use httpdigest_core::{
    DigestAlgorithm, DigestError, DigestFormat, DigestInput, Sha256Hasher, Sha2Hasher,
};

use crate::encode::DigestEncoder;
use crate::header::parse_header_value;

/// Options for [`DigestCodec::create_header_value`].
///
/// Deserializes with defaults for missing fields, so `{}` is SHA-256 with
/// multihash output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOptions {
    /// Algorithm identifier. Only the exact string `sha256` is supported.
    pub algorithm: String,
    /// Emit `mh=` (multihash) instead of `SHA-256=`.
    #[serde(alias = "useMultihash")]
    pub use_multihash: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            algorithm: "sha256".to_string(),
            use_multihash: true,
        }
    }
}

impl CreateOptions {
    /// SHA-256 options emitting the plain `SHA-256=` form.
    pub fn plain() -> Self {
        Self {
            use_multihash: false,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn with_multihash(mut self, use_multihash: bool) -> Self {
        self.use_multihash = use_multihash;
        self
    }

    /// The format these options select.
    pub fn format(&self) -> DigestFormat {
        DigestFormat::from_multihash_flag(self.use_multihash)
    }
}

/// Outcome of [`DigestCodec::verify_header_value`].
///
/// Treat anything but `verified == true` as "not verified". A plain digest
/// mismatch has no `error`; a header or input that could not be processed
/// carries one.
#[derive(Debug)]
pub struct VerificationResult {
    pub verified: bool,
    pub error: Option<DigestError>,
}

impl VerificationResult {
    fn verified() -> Self {
        Self {
            verified: true,
            error: None,
        }
    }

    fn mismatch() -> Self {
        Self {
            verified: false,
            error: None,
        }
    }

    fn failed(error: DigestError) -> Self {
        Self {
            verified: false,
            error: Some(error),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

/// Creates and verifies digest header values with an injected hasher.
///
/// The codec holds no per-call state; one instance can serve concurrent
/// calls.
#[derive(Debug, Clone, Default)]
pub struct DigestCodec<H = Sha2Hasher> {
    encoder: DigestEncoder<H>,
}

impl DigestCodec<Sha2Hasher> {
    /// Codec backed by the `sha2` crate.
    pub fn new() -> Self {
        Self::with_hasher(Sha2Hasher)
    }
}

impl<H: Sha256Hasher> DigestCodec<H> {
    /// Codec backed by a caller-supplied SHA-256 implementation.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            encoder: DigestEncoder::new(hasher),
        }
    }

    /// Create a header value (`SHA-256=...` or `mh=u...`) for `data`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if `options.algorithm` is not exactly
    ///   `sha256`. The input is not read in that case.
    /// - `Io` / `Serialization` if the input cannot be normalized.
    pub async fn create_header_value(
        &self,
        data: impl Into<DigestInput>,
        options: &CreateOptions,
    ) -> Result<String, DigestError> {
        let algorithm = DigestAlgorithm::from_identifier(&options.algorithm)?;
        let data = data.into();
        let kind = data.kind();
        let bytes = data.into_bytes().await?;
        let encoded = self.encoder.encode(&bytes, algorithm, options.format());
        tracing::debug!(
            input = kind,
            %algorithm,
            tag = %encoded.tag,
            len = bytes.len(),
            "created digest header value"
        );
        Ok(encoded.to_string())
    }

    /// Check `header_value` against a digest of `data`.
    ///
    /// Never fails. Header values that cannot be parsed, unsupported
    /// algorithms and unreadable inputs all produce `verified: false` with
    /// the error attached.
    pub async fn verify_header_value(
        &self,
        data: impl Into<DigestInput>,
        header_value: &str,
    ) -> VerificationResult {
        let parsed = match parse_header_value(header_value) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::warn!(%error, "rejected digest header value");
                return VerificationResult::failed(error);
            }
        };

        let bytes = match data.into().into_bytes().await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(%error, "could not read body for digest verification");
                return VerificationResult::failed(error);
            }
        };

        let expected = self.encoder.encode(&bytes, parsed.algorithm, parsed.format());
        let verified = expected.encoded_payload == parsed.encoded_payload;
        tracing::debug!(
            tag = %parsed.tag,
            syntax = ?parsed.syntax,
            verified,
            "verified digest header value"
        );
        if verified {
            VerificationResult::verified()
        } else {
            VerificationResult::mismatch()
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    proptest! {
        /// Creating twice yields the same header value.
        #[test]
        fn create_is_deterministic(
            body in prop::collection::vec(any::<u8>(), 0..256),
            mh in any::<bool>(),
        ) {
            let codec = DigestCodec::new();
            let options = CreateOptions::default().with_multihash(mh);
            let a = block_on(codec.create_header_value(body.clone(), &options)).unwrap();
            let b = block_on(codec.create_header_value(body, &options)).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Every created header verifies against its own body.
        #[test]
        fn round_trip_verifies(
            body in prop::collection::vec(any::<u8>(), 0..256),
            mh in any::<bool>(),
        ) {
            let codec = DigestCodec::new();
            let options = CreateOptions::default().with_multihash(mh);
            let header = block_on(codec.create_header_value(body.clone(), &options)).unwrap();
            prop_assert!(block_on(codec.verify_header_value(body, &header)).verified);
        }

        /// Flipping one byte of the body breaks verification.
        #[test]
        fn mutated_body_fails(
            body in prop::collection::vec(any::<u8>(), 1..256),
            index in any::<prop::sample::Index>(),
            mh in any::<bool>(),
        ) {
            let codec = DigestCodec::new();
            let options = CreateOptions::default().with_multihash(mh);
            let header = block_on(codec.create_header_value(body.clone(), &options)).unwrap();
            let mut mutated = body;
            let i = index.index(mutated.len());
            mutated[i] ^= 0x01;
            let result = block_on(codec.verify_header_value(mutated, &header));
            prop_assert!(!result.verified);
            prop_assert!(result.error.is_none());
        }

        /// Arbitrary header strings never panic the verifier.
        #[test]
        fn verify_is_total(header in ".{0,80}") {
            let codec = DigestCodec::new();
            let result = block_on(codec.verify_header_value("body", &header));
            if result.error.is_some() {
                prop_assert!(!result.verified);
            }
        }
    }
}
