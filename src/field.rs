//! Arithmetic modulo the bn256 base-field prime `P` and group order `Order`.
//!
//! Hash inputs and outputs are 256-bit words, so the protocol-level math is
//! done on `BigUint`. Curve arithmetic itself goes through halo2curves; the
//! conversions at the bottom of this module move values between the two.
use std::sync::LazyLock;

use halo2curves::bn256::{Fq, Fr};
use halo2curves::ff::PrimeField;
use num_bigint::BigUint;
use num_traits::One;

/// Big-endian bytes of the base-field prime
/// `0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47`.
const FIELD_MODULUS_BYTES: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// Big-endian bytes of the prime group order
/// `0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001`.
const GROUP_ORDER_BYTES: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Constant term of the curve equation `y² = x³ + 3`.
pub const CURVE_B: u32 = 3;

/// Base-field prime `P`.
pub static FIELD_MODULUS: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_bytes_be(&FIELD_MODULUS_BYTES));

/// Order of the cyclic group generated by the generator.
pub static GROUP_ORDER: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_bytes_be(&GROUP_ORDER_BYTES));

// (P - 1) / 2
static EULER_EXPONENT: LazyLock<BigUint> =
    LazyLock::new(|| (&*FIELD_MODULUS - 1u32) >> 1u32);

// (P + 1) / 4, valid because P ≡ 3 (mod 4)
static SQRT_EXPONENT: LazyLock<BigUint> =
    LazyLock::new(|| (&*FIELD_MODULUS + 1u32) >> 2u32);

static THREE: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(3u32));

/// Euler's criterion: `x^((P-1)/2) == 1 (mod P)`.
pub fn is_square(x: &BigUint) -> bool {
    x.modpow(&EULER_EXPONENT, &FIELD_MODULUS).is_one()
}

/// Square root of a quadratic residue modulo `P`.
///
/// The result is meaningless when `x` is not a residue; check with
/// [`is_square`] first.
pub fn square_root(x: &BigUint) -> BigUint {
    x.modpow(&SQRT_EXPONENT, &FIELD_MODULUS)
}

/// Right-hand side of the curve equation, `(x³ + 3) mod P`.
pub fn y_squared(x: &BigUint) -> BigUint {
    (x.modpow(&THREE, &FIELD_MODULUS) + CURVE_B) % &*FIELD_MODULUS
}

/// True iff some `y` puts `(x, y)` on the curve.
pub fn is_curve_x_ordinate(x: &BigUint) -> bool {
    is_square(&y_squared(x))
}

fn from_biguint<F: PrimeField>(x: &BigUint) -> Option<F> {
    let be = x.to_bytes_be();
    let mut repr = F::Repr::default();
    if be.len() > repr.as_ref().len() {
        return None;
    }
    // halo2curves bn256 reprs are little-endian
    for (dst, src) in repr.as_mut().iter_mut().zip(be.iter().rev()) {
        *dst = *src;
    }
    Option::from(F::from_repr(repr))
}

fn to_biguint<F: PrimeField>(x: &F) -> BigUint {
    BigUint::from_bytes_le(x.to_repr().as_ref())
}

/// Base-field element for `x`, or `None` if `x >= P`.
pub fn fq_from_biguint(x: &BigUint) -> Option<Fq> {
    from_biguint(x)
}

/// Scalar for `x`, or `None` if `x >= Order`.
pub fn fr_from_biguint(x: &BigUint) -> Option<Fr> {
    from_biguint(x)
}

pub fn biguint_from_fq(x: &Fq) -> BigUint {
    to_biguint(x)
}

pub fn biguint_from_fr(x: &Fr) -> BigUint {
    to_biguint(x)
}
