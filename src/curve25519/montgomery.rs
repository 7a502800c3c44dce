//! X25519 scalar multiplication on the Montgomery form of Curve25519
//! (RFC 7748).

use super::field::FieldElement;

/// `a24 = (486662 - 2) / 4`, the Montgomery ladder step constant for
/// Curve25519 (`y^2 = x^3 + 486662x^2 + x`).
const A24: FieldElement = FieldElement::from_u32(121665);

/// Clamps a 32-byte scalar per RFC 7748 §5: clears the low 3 bits (cofactor),
/// clears the top bit, and sets the second-highest bit.
pub(crate) fn clamp(mut scalar: [u8; 32]) -> [u8; 32] {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

fn decode_u_coordinate(u: &[u8; 32]) -> FieldElement {
    let mut masked = *u;
    masked[31] &= 0x7f;
    FieldElement::from_bytes(&masked)
}

/// Runs the Montgomery ladder: `scalar * u` where `scalar` is already
/// clamped and `u` is the peer's 32-byte u-coordinate (basepoint `9` for
/// key generation).
///
/// Follows the RFC 7748 §5 pseudocode directly: constant-time conditional
/// swaps, no secret-dependent branches.
pub(crate) fn x25519(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let x1 = decode_u_coordinate(u);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;
    let mut swap: u32 = 0;

    for t in (0..255).rev() {
        let kt = ((scalar[t >> 3] >> (t & 7)) & 1) as u32;
        swap ^= kt;
        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = kt;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;
        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (aa + A24 * e);
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    (x2 * z2.invert()).to_bytes()
}

/// Derives the public u-coordinate for a clamped private scalar:
/// `scalar * 9`.
pub(crate) fn scalar_mult_base(scalar: &[u8; 32]) -> [u8; 32] {
    let mut basepoint = [0u8; 32];
    basepoint[0] = 9;
    x25519(scalar, &basepoint)
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
    fn rfc7748_section_6_1_shared_secret() {
        let alice_priv = clamp(from_hex(
            "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
        ));
        let bob_priv = clamp(from_hex(
            "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
        ));
        let alice_pub = scalar_mult_base(&alice_priv);
        let bob_pub = scalar_mult_base(&bob_priv);

        let k1 = x25519(&alice_priv, &bob_pub);
        let k2 = x25519(&bob_priv, &alice_pub);
        assert_eq!(k1, k2);
        assert_eq!(
            k1,
            from_hex("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
        );
    }

    #[test]
    fn scalar_mult_base_matches_explicit_basepoint() {
        let scalar = clamp([7u8; 32]);
        let mut basepoint = [0u8; 32];
        basepoint[0] = 9;
        assert_eq!(scalar_mult_base(&scalar), x25519(&scalar, &basepoint));
    }
}
