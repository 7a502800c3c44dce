//! C4: ECDH and signatures over Curve25519.
//!
//! All long-term and ephemeral keys are carried in Montgomery form (the
//! `u`-coordinate used by X25519 key agreement, RFC 7748). Signatures use
//! the twisted-Edwards form internally (RFC 8032's Ed25519), via the
//! sign-bit-folding conversion in [`xeddsa`] — the same 32-byte public
//! key serves both ECDH and signature verification.

mod edwards;
mod field;
mod montgomery;
mod scalar;
mod xeddsa;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Curve25519 public key (Montgomery `u`-coordinate).
pub type PublicKey = [u8; 32];

/// A Curve25519 key pair. The private scalar is zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct KeyPair {
    private: [u8; 32],
    #[zeroize(skip)]
    public: [u8; 32],
}

impl KeyPair {
    /// Generates a key pair from 32 bytes of caller-supplied randomness.
    ///
    /// The random bytes are copied as the private scalar and clamped per
    /// RFC 7748 §5; the public key is `scalar_mult(private, 9)`.
    pub fn generate(random: [u8; 32]) -> Self {
        let private = montgomery::clamp(random);
        let public = montgomery::scalar_mult_base(&private);
        KeyPair { private, public }
    }

    /// Reconstructs a key pair from an already-clamped private scalar,
    /// recomputing the public key. Used by callers that persist only the
    /// private half (e.g. loading an identity key from storage).
    pub fn from_private(private: [u8; 32]) -> Self {
        let private = montgomery::clamp(private);
        let public = montgomery::scalar_mult_base(&private);
        KeyPair { private, public }
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn private(&self) -> &[u8; 32] {
        &self.private
    }
}

/// Derives the ECDH shared secret `scalar_mult(our.private, their_public)`.
pub fn shared_secret(our: &KeyPair, their_public: &PublicKey) -> [u8; 32] {
    montgomery::x25519(&our.private, their_public)
}

/// Signs `message` under `our`'s private scalar, producing a 64-byte
/// signature that verifies against `our.public()` via [`verify`].
///
/// `random` is additional entropy folded into the deterministic nonce
/// hash (RFC 8032 §5.1.6 step 2, extended with caller-supplied
/// randomness as a defense against nonce-derivation faults); passing all
/// zero bytes still yields a signature that verifies, since the private
/// scalar and message already determine a unique nonce.
pub fn sign(our: &KeyPair, message: &[u8], random: [u8; 64]) -> [u8; 64] {
    xeddsa::sign(&our.private, message, &random)
}

/// Verifies a signature produced by [`sign`] against `their_public`.
/// Returns `false` on any malformed input rather than erroring.
pub fn verify(their_public: &PublicKey, message: &[u8], signature: &[u8; 64]) -> bool {
    xeddsa::verify(their_public, message, signature)
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
        }
        out
    }

    // RFC 7748 §6.1.
    #[test]
    fn ecdh_commutes_and_matches_rfc7748() {
        let alice_priv =
            from_hex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
        let bob_priv = from_hex("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

        let alice = KeyPair::from_private(alice_priv);
        let bob = KeyPair::from_private(bob_priv);

        let ab = shared_secret(&alice, bob.public());
        let ba = shared_secret(&bob, alice.public());
        assert_eq!(ab, ba);
        assert_eq!(
            ab,
            from_hex("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
        );
    }

    #[test]
    fn shared_secret_matches_scalar_mult_of_own_public() {
        let priv_bytes = [42u8; 32];
        let kp = KeyPair::from_private(priv_bytes);
        let self_shared = shared_secret(&kp, kp.public());
        let direct = montgomery::x25519(kp.private(), kp.public());
        assert_eq!(self_shared, direct);
    }

    #[test]
    fn sign_then_verify() {
        let kp = KeyPair::generate([3u8; 32]);
        let msg = b"ratchet header bytes";
        let sig = sign(&kp, msg, [9u8; 64]);
        assert!(verify(kp.public(), msg, &sig));
    }

    #[test]
    fn flipped_signature_bit_fails_verification() {
        let kp = KeyPair::generate([4u8; 32]);
        let msg = b"message";
        let mut sig = sign(&kp, msg, [0u8; 64]);
        sig[10] ^= 1;
        assert!(!verify(kp.public(), msg, &sig));
    }

    #[test]
    fn flipped_message_bit_fails_verification() {
        let kp = KeyPair::generate([5u8; 32]);
        let sig = sign(&kp, b"message", [0u8; 64]);
        assert!(!verify(kp.public(), b"Message", &sig));
    }
}
