//! Hash algorithms used by the crate.
//!
//! SHA-256 is the public primitive (`sha256`). SHA-512 is kept internal:
//! it only exists to support RFC 8032 nonce and challenge derivation inside
//! [`crate::curve25519`] and is not part of the public surface.

pub mod sha256;
pub(crate) mod sha512;

pub use sha256::sha256;
