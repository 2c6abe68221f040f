//! # Error Types
//!
//! A single error enum covers every failure in digest creation, header
//! parsing and verification. All variants use `thiserror` for `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Creation surfaces these errors to the caller.
//! - Verification never returns them; they ride along inside a negative
//!   verification result as diagnostics.

use thiserror::Error;

/// Errors produced while creating, parsing or verifying digest header values.
#[derive(Error, Debug)]
pub enum DigestError {
    /// The requested or parsed algorithm is not SHA-256.
    #[error("{0} is not supported")]
    UnsupportedAlgorithm(String),

    /// An `mh` header payload does not carry the SHA-256 multihash prefix.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The header value has no `=` separating tag from payload.
    #[error("malformed header value: {0}")]
    MalformedHeaderValue(String),

    /// The encoded payload does not decode to a SHA-256 digest.
    #[error("invalid digest payload: {0}")]
    InvalidPayload(String),

    /// Structured input could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A blob byte source failed while being read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
