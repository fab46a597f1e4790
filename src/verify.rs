use halo2curves::group::prime::PrimeCurveAffine;
use halo2curves::group::Curve;
use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;

use crate::field::fr_from_biguint;
use crate::hash::{hash_point, hash_to_curve, scalar_from_curve, to_word};
use crate::point::{coords_from_point, generator};
use crate::{VRFError, VRFProof};

/// Check `proof`. `Ok(false)` means the proof is invalid; errors are
/// reserved for values that cannot be encoded.
pub fn verify_proof(proof: &VRFProof) -> Result<bool, VRFError> {
    proof.verify()
}

impl VRFProof {
    /// Output hash of a proof, without checking it.
    pub fn proof_to_hash(&self) -> Result<BigUint, VRFError> {
        hash_point(&self.gamma)
    }

    /// Verify the proof against its own public key and seed.
    ///
    /// With H = hash_to_curve(pk, seed):
    ///   U' = c*pk + s*G     (= m*G for an honest proof)
    ///   V' = c*gamma + s*H  (= m*H for an honest proof)
    /// and the proof holds iff c == scalar_from_curve(H, pk, gamma, U', V')
    /// and output == keccak(gamma).
    pub fn verify(&self) -> Result<bool, VRFError> {
        let (pk_x, pk_y) = coords_from_point(&self.public_key)?;
        let generator_h = hash_to_curve(&pk_x, &pk_y, &self.seed)?;
        let output = self.proof_to_hash()?;

        if bool::from(self.public_key.is_identity()) {
            debug!("public key is the point at infinity");
            return Ok(false);
        }
        let (Some(c), Some(s)) = (fr_from_biguint(&self.c), fr_from_biguint(&self.s)) else {
            debug!("proof scalars outside the group order");
            return Ok(false);
        };

        let u = (self.public_key.to_curve() * c + generator().to_curve() * s).to_affine();
        let v = (self.gamma.to_curve() * c + generator_h.to_curve() * s).to_affine();

        let challenge_c = scalar_from_curve(&[generator_h, self.public_key, self.gamma, u, v])?;

        let valid = words_eq(&self.c, &challenge_c) & words_eq(&self.output, &output);
        let valid = bool::from(valid);
        debug!(valid, seed = %self.seed, "verified vrf proof");
        Ok(valid)
    }
}

// Constant-time comparison of two integers as 32-byte words. Anything wider
// than a word cannot match a hash output.
fn words_eq(a: &BigUint, b: &BigUint) -> Choice {
    match (to_word(a), to_word(b)) {
        (Ok(a), Ok(b)) => a[..].ct_eq(&b[..]),
        _ => Choice::from(0),
    }
}
