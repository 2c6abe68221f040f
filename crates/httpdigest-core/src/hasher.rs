//! # Hashing Capability
//!
//! The codec never reaches for a global hash implementation. It is handed a
//! [`Sha256Hasher`], so tests and embedders can substitute their own.
//! [`Sha2Hasher`] is the default, backed by the RustCrypto `sha2` crate.

use sha2::{Digest, Sha256};

/// A SHA-256 implementation: bytes in, 32-byte digest out.
///
/// Implementations must be pure. Concurrent calls on one hasher must not
/// interfere with each other.
pub trait Sha256Hasher: Send + Sync {
    /// Hash `data` with SHA-256.
    fn sha256(&self, data: &[u8]) -> [u8; 32];
}

/// Default hasher backed by `sha2::Sha256`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha2Hasher;

impl Sha256Hasher for Sha2Hasher {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}

impl<H: Sha256Hasher + ?Sized> Sha256Hasher for &H {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        (**self).sha256(data)
    }
}

impl<H: Sha256Hasher + ?Sized> Sha256Hasher for std::sync::Arc<H> {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        (**self).sha256(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn known_sha256_vector() {
        // SHA256("{}")
        assert_eq!(
            to_hex(&Sha2Hasher.sha256(b"{}")),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn empty_input_vector() {
        assert_eq!(
            to_hex(&Sha2Hasher.sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn deterministic() {
        let hasher = Sha2Hasher;
        assert_eq!(hasher.sha256(b"hello"), hasher.sha256(b"hello"));
        assert_ne!(hasher.sha256(b"hello"), hasher.sha256(b"hellp"));
    }

    #[test]
    fn references_and_arcs_delegate() {
        let shared = std::sync::Arc::new(Sha2Hasher);
        let by_ref = &Sha2Hasher;
        assert_eq!(shared.sha256(b"x"), Sha2Hasher.sha256(b"x"));
        assert_eq!(by_ref.sha256(b"x"), Sha2Hasher.sha256(b"x"));
    }
}
