//! # httpdigest — Digest Header Values
//!
//! Creates and verifies HTTP `Digest` header values for message bodies:
//!
//! - **Plain**: `SHA-256=<base64 of the 32-byte digest>`.
//! - **Multihash** (default): `mh=u<base64url of the 34-byte sha2-256 multihash>`.
//!
//! Bodies may be text, structured JSON values, raw bytes or async blobs;
//! see [`DigestInput`]. Verification additionally accepts colon-wrapped
//! payloads (`sha-256=:...:`), which creation never emits.
//!
//! ```no_run
//! # async fn demo() -> Result<(), httpdigest::DigestError> {
//! use httpdigest::{create_header_value, verify_header_value, CreateOptions};
//!
//! let header = create_header_value(r#"{"hello": "world"}"#, &CreateOptions::plain()).await?;
//! assert_eq!(header, "SHA-256=X48E9qOokqqrvdts8nOJRJN3OWDUoyWxBf7kbu9DBPE=");
//! assert!(verify_header_value(r#"{"hello": "world"}"#, &header).await.verified);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `httpdigest-core` internally.
//! - Hashing goes through an injected `Sha256Hasher`; the free functions
//!   below use the `sha2`-backed default.
//! - Verification is total: it reports, never returns, errors.

pub mod codec;
pub mod encode;
pub mod header;

pub use codec::{CreateOptions, DigestCodec, VerificationResult};
pub use encode::{decode_payload, DigestEncoder, EncodedDigest};
pub use header::{parse_header_value, HeaderTag, ParsedHeaderValue, PayloadSyntax};
pub use httpdigest_core::{
    Blob, DigestAlgorithm, DigestError, DigestFormat, DigestInput, Multihash, Sha256Hasher,
    Sha2Hasher,
};

/// Create a header value with the default `sha2` hasher.
///
/// # Errors
///
/// See [`DigestCodec::create_header_value`].
pub async fn create_header_value(
    data: impl Into<DigestInput>,
    options: &CreateOptions,
) -> Result<String, DigestError> {
    DigestCodec::new().create_header_value(data, options).await
}

/// Verify a header value with the default `sha2` hasher. Never fails.
pub async fn verify_header_value(
    data: impl Into<DigestInput>,
    header_value: &str,
) -> VerificationResult {
    DigestCodec::new().verify_header_value(data, header_value).await
}
