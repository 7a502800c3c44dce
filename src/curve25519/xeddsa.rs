//! XEdDSA: Ed25519-style signatures over Curve25519 Montgomery key pairs.
//!
//! Curve25519 and Ed25519 share the same group (up to a birational map
//! between the Montgomery and twisted Edwards models), so a Curve25519
//! private scalar can sign directly as an Edwards scalar without a
//! separate Ed25519 key pair. The only wrinkle is the public key: peers
//! only ever see the Montgomery `u`-coordinate, which determines the
//! Edwards point only up to the sign of `x`. That sign bit is folded
//! into the otherwise-unused top bit of the signature's `s` component
//! (`s < ℓ < 2^253`, so its top three bits are always free) and the
//! verifier strips it back out before checking the Montgomery `u`
//! against the recovered Edwards point.

use super::edwards::Point;
use super::field::FieldElement;
use super::scalar::Scalar;
use crate::hash::sha512::sha512;
use zeroize::Zeroize;

/// Domain-separation prefix for nonce derivation: `0xfe` followed by
/// thirty-one `0xff` bytes. Keeps the nonce hash input distinguishable
/// from a canonical encoded scalar, which never starts this way.
const NONCE_PREFIX: [u8; 32] = {
    let mut p = [0xffu8; 32];
    p[0] = 0xfe;
    p
};

fn reduce_wide(wide: [u8; 64]) -> Scalar {
    Scalar::reduce(wide)
}

/// Recovers the Edwards `y` coordinate from a Montgomery `u` coordinate
/// via the standard birational map `y = (u - 1) / (u + 1)`.
fn montgomery_u_to_edwards_y(u: &[u8; 32]) -> FieldElement {
    let u_fe = FieldElement::from_bytes(u);
    (u_fe - FieldElement::ONE) * (u_fe + FieldElement::ONE).invert()
}

/// Signs `message` with a clamped Curve25519 private scalar, deriving
/// the Edwards key pair implied by that scalar. `random` supplies extra
/// entropy folded into the nonce hash; passing all-zero bytes still
/// yields a safe (if then fully deterministic) signature, since the
/// private scalar itself is already secret and message-dependent.
pub(crate) fn sign(private_scalar: &[u8; 32], message: &[u8], random: &[u8; 64]) -> [u8; 64] {
    let mut a = Scalar::from_bytes(*private_scalar);
    let public_point = Point::scalar_mult_basepoint(&a.to_bytes());
    let public_bytes = public_point.compress();
    let sign_bit = public_bytes[31] >> 7;

    let mut nonce_input = Vec::with_capacity(32 + 32 + message.len() + 64);
    nonce_input.extend_from_slice(&NONCE_PREFIX);
    nonce_input.extend_from_slice(&a.to_bytes());
    nonce_input.extend_from_slice(message);
    nonce_input.extend_from_slice(random);
    let mut nonce_hash = sha512(&nonce_input);
    nonce_input.zeroize();
    let mut r = reduce_wide(nonce_hash);
    nonce_hash.zeroize();

    let r_point = Point::scalar_mult_basepoint(&r.to_bytes());
    let r_bytes = r_point.compress();

    let mut challenge_input = Vec::with_capacity(32 + 32 + message.len());
    challenge_input.extend_from_slice(&r_bytes);
    challenge_input.extend_from_slice(&public_bytes);
    challenge_input.extend_from_slice(message);
    let h = reduce_wide(sha512(&challenge_input));

    let mut s = Scalar::from_mul_sum(h, a, r);
    let mut s_bytes = s.to_bytes();
    s_bytes[31] |= sign_bit << 7;

    a.0.zeroize();
    r.0.zeroize();
    s.0.zeroize();

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_bytes);
    signature[32..].copy_from_slice(&s_bytes);
    signature
}

/// Verifies a signature produced by [`sign`] against a peer's Montgomery
/// `u`-coordinate public key. Returns `false` on any malformed input
/// (non-canonical `s`, a `u` with no corresponding curve point) rather
/// than erroring, matching Ed25519 verification's boolean contract.
pub(crate) fn verify(their_public_u: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> bool {
    let sign_bit = signature[63] >> 7;

    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);
    s_bytes[31] &= 0x7f;

    if s_bytes[31] >= 0x10 {
        return false;
    }

    let y = montgomery_u_to_edwards_y(their_public_u);
    let mut public_bytes = y.to_bytes();
    public_bytes[31] |= sign_bit << 7;

    let public_point = match Point::decompress(&public_bytes) {
        Some(point) => point,
        None => return false,
    };

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);

    let mut challenge_input = Vec::with_capacity(32 + 32 + message.len());
    challenge_input.extend_from_slice(&r_bytes);
    challenge_input.extend_from_slice(&public_bytes);
    challenge_input.extend_from_slice(message);
    let h = reduce_wide(sha512(&challenge_input));

    let s = Scalar::from_bytes(s_bytes);
    let lhs = Point::scalar_mult_basepoint(&s.to_bytes());

    let h_a = public_point.scalar_mult(&h.to_bytes());
    let rhs = match Point::decompress(&r_bytes) {
        Some(r_point) => r_point.add(&h_a),
        None => return false,
    };

    crate::ct::eq_32(&lhs.compress(), &rhs.compress())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::montgomery;

    #[test]
    fn sign_then_verify_round_trips() {
        let private_scalar = montgomery::clamp([7u8; 32]);
        let public_u = montgomery::scalar_mult_base(&private_scalar);
        let message = b"a ratchet message header";
        let random = [0x42u8; 64];

        let signature = sign(&private_scalar, message, &random);
        assert!(verify(&public_u, message, &signature));
    }

    #[test]
    fn verify_rejects_tampered_message() {
        let private_scalar = montgomery::clamp([9u8; 32]);
        let public_u = montgomery::scalar_mult_base(&private_scalar);
        let signature = sign(&private_scalar, b"original", &[0u8; 64]);
        assert!(!verify(&public_u, b"tampered", &signature));
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let private_scalar = montgomery::clamp([11u8; 32]);
        let other_scalar = montgomery::clamp([22u8; 32]);
        let other_public = montgomery::scalar_mult_base(&other_scalar);
        let message = b"message";
        let signature = sign(&private_scalar, message, &[0u8; 64]);
        assert!(!verify(&other_public, message, &signature));
    }
}
