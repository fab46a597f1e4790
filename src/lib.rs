//! Verifiable random function over the bn256 G1 curve `y² = x³ + 3`.
//!
//! Proofs use keccak256 over 32-byte big-endian words for every hash, so a
//! Solidity contract can re-derive the same hash-to-curve point and
//! Fiat-Shamir challenge and check them.
use halo2curves::bn256::{Fr, G1Affine};
use num_bigint::BigUint;

mod error;
pub mod field;
pub mod hash;
mod keys;
pub mod point;
mod prove;
mod verify;
mod wire;

pub use error::VRFError;
pub use prove::generate_proof;
pub use verify::verify_proof;
pub use wire::PROOF_BYTES;

#[derive(Debug, Clone, Copy)]
pub struct VRFKeypair {
    pub public_key: VRFPubkey,
    pub private_key: VRFPrikey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VRFPubkey {
    pub point: G1Affine,
}

/// Secret scalar, always in `[1, Order)`.
#[derive(Clone, Copy)]
pub struct VRFPrikey {
    pub(crate) scalar: Fr,
}

/// A VRF output together with the proof that it was derived from `public_key`.
///
/// `c`, `s`, `seed` and `output` are the integers an on-chain verifier takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VRFProof {
    pub public_key: G1Affine,
    pub gamma: G1Affine,
    pub c: BigUint,
    pub s: BigUint,
    pub seed: BigUint,
    pub output: BigUint,
}
