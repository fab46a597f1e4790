//! Keccak-based hashing that matches the on-chain verifier word for word.
//!
//! Every multi-value input is packed as right-aligned 32-byte big-endian
//! words with no prefixes or separators, the same bytes Solidity's
//! `abi.encodePacked(uint256, ...)` produces.
use std::iter;

use halo2curves::bn256::G1Affine;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha3::{Digest, Keccak256};
use tracing::trace;

use crate::field::{is_curve_x_ordinate, square_root, y_squared, FIELD_MODULUS, GROUP_ORDER};
use crate::point::{coords_from_point, generator, new_curve_point};
use crate::VRFError;

/// Width of one packed word.
pub const WORD_BYTES: usize = 32;

/// `x` as a single right-aligned big-endian word.
pub fn to_word(x: &BigUint) -> Result<[u8; WORD_BYTES], VRFError> {
    let be = x.to_bytes_be();
    if be.len() > WORD_BYTES {
        return Err(VRFError::WordOverflow(be.len()));
    }
    let mut word = [0u8; WORD_BYTES];
    word[WORD_BYTES - be.len()..].copy_from_slice(&be);
    Ok(word)
}

/// Concatenate `xs` as 32-byte big-endian words.
pub fn pack_uint256s(xs: &[&BigUint]) -> Result<Vec<u8>, VRFError> {
    let mut out = Vec::with_capacity(xs.len() * WORD_BYTES);
    for x in xs {
        out.extend_from_slice(&to_word(x)?);
    }
    Ok(out)
}

/// `keccak256(pack_uint256s(xs))` read as a big-endian integer.
pub fn hash_uint256s(xs: &[&BigUint]) -> Result<BigUint, VRFError> {
    let packed = pack_uint256s(xs)?;
    Ok(BigUint::from_bytes_be(&Keccak256::digest(&packed)))
}

pub fn mask_hash(mask: &BigUint, xs: &[&BigUint]) -> Result<BigUint, VRFError> {
    Ok(hash_uint256s(xs)? & mask)
}

/// Hash `xs` uniformly into `[0, q)`.
///
/// The digest is masked to the bit length of `q`; out-of-range results are
/// rehashed on their own until one lands below `q`. Each attempt succeeds
/// with probability at least one half.
pub fn zq_hash(q: &BigUint, xs: &[&BigUint]) -> Result<BigUint, VRFError> {
    if q.is_zero() {
        return Err(VRFError::ZeroModulus);
    }
    let mask = (BigUint::one() << q.bits()) - 1u32;
    let mut r = mask_hash(&mask, xs)?;
    let mut rehashes = 0u32;
    while &r >= q {
        r = mask_hash(&mask, &[&r])?;
        rehashes += 1;
    }
    trace!(rehashes, "zq hash");
    Ok(r)
}

/// Deterministic one-way map of `(px, py, input)` onto the curve.
///
/// The y-ordinate is always the root returned by [`square_root`], never its
/// negation; the on-chain verifier makes the same choice.
pub fn hash_to_curve(px: &BigUint, py: &BigUint, input: &BigUint) -> Result<G1Affine, VRFError> {
    let mut x = zq_hash(&FIELD_MODULUS, &[px, py, input])?;
    let mut rehashes = 0u32;
    while !is_curve_x_ordinate(&x) {
        x = zq_hash(&FIELD_MODULUS, &[&x])?;
        rehashes += 1;
    }
    trace!(rehashes, "hash to curve");
    let y = square_root(&y_squared(&x));
    new_curve_point(&x, &y)
}

/// Fiat-Shamir challenge over the generator followed by `points`.
pub fn scalar_from_curve(points: &[G1Affine]) -> Result<BigUint, VRFError> {
    let mut coords = Vec::with_capacity(2 * (points.len() + 1));
    for p in iter::once(generator()).chain(points.iter().copied()) {
        let (x, y) = coords_from_point(&p)?;
        coords.push(x);
        coords.push(y);
    }
    let words: Vec<&BigUint> = coords.iter().collect();
    zq_hash(&GROUP_ORDER, &words)
}

/// VRF output for `gamma`: the keccak hash of its encoding.
pub fn hash_point(p: &G1Affine) -> Result<BigUint, VRFError> {
    let (x, y) = coords_from_point(p)?;
    hash_uint256s(&[&x, &y])
}
