//! The twisted Edwards form of Curve25519 used by Ed25519 signatures
//! (RFC 8032), in extended projective coordinates `(X : Y : Z : T)` with
//! `x = X/Z`, `y = Y/Z`, `xy = T/Z`.
//!
//! Point addition uses the unified addition law for `a = -1` twisted
//! Edwards curves (hwcd 2008), which is complete for Curve25519's
//! non-square `d` and so doubles as the doubling formula. This trades a
//! dedicated doubling formula's speed for one code path with no
//! point-dependent branching, which matters more here since this module
//! has no precomputed tables to fall back on for performance.

use super::field::FieldElement;

/// `d = -121665/121666 mod p`, the twisted Edwards curve constant.
const D: FieldElement = FieldElement([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// `2d mod p`.
const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// `sqrt(-1) mod p`, used to recover `x` during point decompression.
const SQRT_M1: FieldElement = FieldElement([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// `x` coordinate of the standard Ed25519 base point `B`.
const BASE_X: FieldElement = FieldElement([
    -14297830, -7645148, 16144683, -16471763, 27570974, -2696100, -26142465, 8378389, 20764389,
    8758491,
]);

/// `y` coordinate of the standard Ed25519 base point `B`.
const BASE_Y: FieldElement = FieldElement([
    -26843541, -6710886, 13421773, -13421773, 26843546, 6710886, -13421773, 13421773, -26843546,
    -6710886,
]);

#[derive(Clone, Copy)]
pub(crate) struct Point {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

impl Point {
    pub(crate) fn identity() -> Self {
        Point {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    pub(crate) fn basepoint() -> Self {
        Point {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::ONE,
            t: BASE_X * BASE_Y,
        }
    }

    fn conditional_select(&mut self, other: &Self, condition: u32) {
        self.x.conditional_move(&other.x, condition);
        self.y.conditional_move(&other.y, condition);
        self.z.conditional_move(&other.z, condition);
        self.t.conditional_move(&other.t, condition);
    }

    /// Unified addition law for `a = -1` twisted Edwards curves
    /// (hwcd 2008 "add-2008-hwcd-3"). Complete: also correct when
    /// `self == other` (doubling).
    pub(crate) fn add(&self, other: &Self) -> Self {
        let a = (self.y - self.x) * (other.y - other.x);
        let b = (self.y + self.x) * (other.y + other.x);
        let c = self.t * D2 * other.t;
        let d = self.z * other.z + self.z * other.z;
        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        Point {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// Constant-time scalar multiplication via double-and-add from the
    /// most significant bit down, selecting between the doubled-only and
    /// doubled-and-added accumulator with a branch-free mask so the bit
    /// pattern of `scalar` never drives a data-dependent branch.
    pub(crate) fn scalar_mult(&self, scalar: &[u8; 32]) -> Self {
        let mut acc = Point::identity();
        for bit_index in (0..256).rev() {
            acc = acc.double();
            let bit = ((scalar[bit_index >> 3] >> (bit_index & 7)) & 1) as u32;
            let added = acc.add(self);
            acc.conditional_select(&added, bit);
        }
        acc
    }

    pub(crate) fn scalar_mult_basepoint(scalar: &[u8; 32]) -> Self {
        Point::basepoint().scalar_mult(scalar)
    }

    /// Encodes this point as 32 bytes: the canonical `y` coordinate with
    /// the sign of `x` folded into the top bit, per RFC 8032 §5.1.2.
    pub(crate) fn compress(&self) -> [u8; 32] {
        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        let mut out = y.to_bytes();
        out[31] ^= (x.is_negative() as u8) << 7;
        out
    }

    /// Recovers a point from its compressed form, or `None` if the
    /// encoding does not correspond to a point on the curve.
    pub(crate) fn decompress(bytes: &[u8; 32]) -> Option<Self> {
        let sign = bytes[31] >> 7;
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        let y = FieldElement::from_bytes(&y_bytes);

        let y2 = y.square();
        let u = y2 - FieldElement::ONE;
        let v = y2 * D + FieldElement::ONE;

        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut x = (u * v7).pow22523() * u * v3;

        let vxx = x.square() * v;
        let has_correct_sign = (vxx - u).is_non_zero() == 0;
        let has_flipped_sign = (vxx + u).is_non_zero() == 0;

        if !has_correct_sign && !has_flipped_sign {
            return None;
        }
        if !has_correct_sign {
            x = x * SQRT_M1;
        }

        if x.is_non_zero() == 0 && sign == 1 {
            return None;
        }
        if x.is_negative() as u8 != sign {
            x = -x;
        }

        Some(Point {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basepoint_round_trips_through_compression() {
        let b = Point::basepoint();
        let encoded = b.compress();
        let decoded = Point::decompress(&encoded).expect("basepoint must decompress");
        assert_eq!(decoded.compress(), encoded);
    }

    #[test]
    fn identity_compresses_to_canonical_one() {
        let id = Point::identity();
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(id.compress(), expected);
    }

    #[test]
    fn scalar_mult_by_group_order_is_identity() {
        // ℓ = 2^252 + 27742317777372353535851937790883648493
        let l: [u8; 32] = [
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ];
        let result = Point::scalar_mult_basepoint(&l);
        assert_eq!(result.compress(), Point::identity().compress());
    }
}
