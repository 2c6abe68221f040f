//! # httpdigest-core — Foundational Types for Digest Header Values
//!
//! Leaf crate of the workspace. It defines what a digest header is made of,
//! while `httpdigest` turns these pieces into header strings and verifies
//! them.
//!
//! ## Key Design Principles
//!
//! 1. **One input type.** Every accepted body representation is a
//!    [`DigestInput`] variant with exactly one normalization rule. No
//!    runtime type inspection on the hashing path.
//!
//! 2. **Injected hashing.** SHA-256 is a [`Sha256Hasher`] capability handed
//!    to the codec, never ambient global state. [`Sha2Hasher`] is the
//!    default.
//!
//! 3. **Fixed-size multihash.** [`Multihash`] only describes sha2-256 with a
//!    32-byte digest; the length byte cannot disagree with the digest.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No module-level mutable state; every call works on its own arguments.

pub mod algorithm;
pub mod error;
pub mod hasher;
pub mod input;
pub mod multihash;

// Re-export primary types for ergonomic imports.
pub use algorithm::{normalize_identifier, DigestAlgorithm, DigestFormat};
pub use error::DigestError;
pub use hasher::{Sha256Hasher, Sha2Hasher};
pub use input::{Blob, DigestInput};
pub use multihash::Multihash;
