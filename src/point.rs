//! 64-byte point encoding shared with the on-chain verifier.
use halo2curves::bn256::{Fq, G1Affine};
use halo2curves::ff::PrimeField;
use halo2curves::group::prime::PrimeCurveAffine;
use halo2curves::{Coordinates, CurveAffine};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::field::{biguint_from_fq, fq_from_biguint};
use crate::hash::{pack_uint256s, WORD_BYTES};
use crate::VRFError;

/// Length of an encoded point: `x` then `y`, one word each.
pub const POINT_BYTES: usize = 2 * WORD_BYTES;

/// The protocol generator `(1, 2)`.
pub fn generator() -> G1Affine {
    G1Affine::generator()
}

/// Build a point from its coordinates, rejecting anything off the curve.
pub fn new_curve_point(x: &BigUint, y: &BigUint) -> Result<G1Affine, VRFError> {
    let bytes = pack_uint256s(&[x, y])?;
    point_from_bytes(&bytes)
}

/// Decode a 64-byte `x || y` encoding. All zeroes is the point at infinity.
pub fn point_from_bytes(bytes: &[u8]) -> Result<G1Affine, VRFError> {
    if bytes.len() != POINT_BYTES {
        return Err(VRFError::InvalidPoint(format!(
            "expected {POINT_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    let x = BigUint::from_bytes_be(&bytes[..WORD_BYTES]);
    let y = BigUint::from_bytes_be(&bytes[WORD_BYTES..]);
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }

    let fx = fq_from_biguint(&x)
        .ok_or_else(|| VRFError::InvalidPoint(format!("x coordinate {x:#x} not in field")))?;
    let fy = fq_from_biguint(&y)
        .ok_or_else(|| VRFError::InvalidPoint(format!("y coordinate {y:#x} not in field")))?;
    Option::from(G1Affine::from_xy(fx, fy))
        .ok_or_else(|| VRFError::InvalidPoint(format!("({x:#x}, {y:#x}) is not on the curve")))
}

/// Encode a point as `x || y`, two big-endian words.
///
/// Infinity encodes as all zeroes; any other point must be on the curve.
pub fn point_to_bytes(p: &G1Affine) -> Result<[u8; POINT_BYTES], VRFError> {
    let mut out = [0u8; POINT_BYTES];
    if bool::from(p.is_identity()) {
        return Ok(out);
    }
    let coordinates: Option<Coordinates<G1Affine>> = p.coordinates().into();
    let coordinates = coordinates.ok_or_else(|| {
        VRFError::InvalidPoint(format!(
            "({:#x}, {:#x}) is not on the curve",
            biguint_from_fq(&p.x),
            biguint_from_fq(&p.y)
        ))
    })?;
    write_word(&mut out[..WORD_BYTES], coordinates.x());
    write_word(&mut out[WORD_BYTES..], coordinates.y());
    Ok(out)
}

/// Split a point into its affine coordinates; infinity is `(0, 0)`.
pub fn coords_from_point(p: &G1Affine) -> Result<(BigUint, BigUint), VRFError> {
    let bytes = point_to_bytes(p)?;
    Ok((
        BigUint::from_bytes_be(&bytes[..WORD_BYTES]),
        BigUint::from_bytes_be(&bytes[WORD_BYTES..]),
    ))
}

// reprs are little-endian, words are big-endian
fn write_word(dst: &mut [u8], x: &Fq) {
    dst.copy_from_slice(x.to_repr().as_ref());
    dst.reverse();
}
