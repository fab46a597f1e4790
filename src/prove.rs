use halo2curves::bn256::Fr;
use halo2curves::ff::FromUniformBytes;
use halo2curves::group::prime::PrimeCurveAffine;
use halo2curves::group::Curve;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use tracing::debug;

use crate::field::{biguint_from_fr, GROUP_ORDER};
use crate::hash::{hash_point, hash_to_curve, scalar_from_curve};
use crate::point::generator;
use crate::{VRFError, VRFPrikey, VRFProof, VRFPubkey};

/// Prove the VRF output for `seed` under `secret_key`.
///
/// `secret_key` must lie in `[1, Order)`. The blinding nonce is drawn from
/// `rng`; a failing source aborts with [`VRFError::Randomness`].
pub fn generate_proof(
    secret_key: &BigUint,
    seed: &BigUint,
    rng: impl RngCore + CryptoRng,
) -> Result<VRFProof, VRFError> {
    VRFPrikey::from_biguint(secret_key)?.prove(seed, rng)
}

impl VRFPrikey {
    /// Construct a proof for `seed`.
    ///
    /// gamma = x * H(pk, seed), and (c, s) is a Schnorr proof that
    /// log_G(pk) == log_H(gamma) under the nonce m:
    ///   c = scalar_from_curve(H, pk, gamma, m*G, m*H)
    ///   s = m - c*x
    pub fn prove(&self, seed: &BigUint, rng: impl RngCore + CryptoRng) -> Result<VRFProof, VRFError> {
        let nonce = sample_nonce(rng)?;
        self.prove_with_nonce(seed, nonce)
    }

    pub(crate) fn prove_with_nonce(&self, seed: &BigUint, nonce_m: Fr) -> Result<VRFProof, VRFError> {
        let public_key = VRFPubkey::from(*self);
        let (pk_x, pk_y) = public_key.coordinates()?;

        let generator_h = hash_to_curve(&pk_x, &pk_y, seed)?;
        let gamma = (generator_h.to_curve() * self.scalar).to_affine();

        // U = m * G, V = m * H
        let u = (generator().to_curve() * nonce_m).to_affine();
        let v = (generator_h.to_curve() * nonce_m).to_affine();

        let challenge_c = scalar_from_curve(&[generator_h, public_key.point, gamma, u, v])?;
        // s = (m - c*x) mod Order, kept non-negative
        let order = &*GROUP_ORDER;
        let cx = (&challenge_c * self.to_biguint()) % order;
        let scalar_s = (biguint_from_fr(&nonce_m) + order - cx) % order;

        let output = hash_point(&gamma)?;
        debug!(%seed, "generated vrf proof");

        Ok(VRFProof {
            public_key: public_key.point,
            gamma,
            c: challenge_c,
            s: scalar_s,
            seed: seed.clone(),
            output,
        })
    }
}

/// Draw m uniformly from [0, Order) by reducing 64 random bytes.
fn sample_nonce(mut rng: impl RngCore + CryptoRng) -> Result<Fr, VRFError> {
    let mut wide = [0u8; 64];
    rng.try_fill_bytes(&mut wide)
        .map_err(|e| VRFError::Randomness(e.to_string()))?;
    Ok(Fr::from_uniform_bytes(&wide))
}
