//! Cryptographic primitive layer and wire codec for a double-ratchet
//! secure messaging implementation.
//!
//! This crate covers exactly two things: the primitives a ratchet
//! session is built from (hashing, keyed MAC, key derivation, Curve25519
//! key agreement and signatures, AES-256-CBC) and the binary wire codec
//! for the two handshake/message record shapes the protocol exchanges.
//! The full ratchet state machine, session persistence, randomness
//! source, and transport are callers' responsibility, not this crate's.
//!
//! # Design goals
//!
//! - No heap allocations in the fixed-size primitives; the codec
//!   allocates only at its explicit `Vec`-returning convenience edges.
//! - Minimal, explicit APIs: fixed-size byte arrays over opaque
//!   wrapper types wherever the data itself has no further invariant.
//! - Every operation zeroizes the secret buffers it touches before
//!   returning, on every exit path.
//!
//! # Module overview
//!
//! - `hash` — SHA-256 (public) and SHA-512 (internal, used only for
//!   Ed25519 nonce/challenge derivation inside `curve25519`).
//! - `mac` — HMAC-SHA256.
//! - `kdf` — HKDF-SHA256.
//! - `curve25519` — Curve25519 key pairs, ECDH, and XEdDSA-style
//!   signatures over the same Montgomery public keys.
//! - `cipher` — AES-256 in CBC mode with PKCS#7-style padding.
//! - `codec` — the ratchet-message and pre-key-message wire records.
//! - `ct` — constant-time equality helpers shared by the curve and
//!   codec layers.
//! - `error` — crate-wide re-exports of the per-module error types.
//!
//! This crate is not intended to replace a full-featured, externally
//! audited cryptographic library; it is the primitive foundation a
//! ratchet session implementation is built on top of.

pub mod cipher;
pub mod codec;
pub(crate) mod ct;
pub mod curve25519;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod mac;

pub use cipher::{aes_cbc_decrypt, aes_cbc_encrypt, aes_cbc_encrypt_length, PaddingError};
pub use curve25519::{
    sign, shared_secret, verify, KeyPair as Curve25519KeyPair, PublicKey as Curve25519PublicKey,
};
pub use hash::sha256;
pub use kdf::hkdf_sha256;
pub use mac::hmac_sha256;
