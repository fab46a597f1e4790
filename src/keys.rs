use std::fmt;

use halo2curves::bn256::Fr;
use halo2curves::ff::{Field, FromUniformBytes, PrimeField};
use halo2curves::group::prime::PrimeCurveAffine;
use halo2curves::group::Curve;
use num_bigint::BigUint;
use rand_core::RngCore;
use sha2::Digest;
use sha2::Sha512;

use crate::field::{biguint_from_fr, fr_from_biguint};
use crate::hash::WORD_BYTES;
use crate::point::{coords_from_point, generator, point_from_bytes, point_to_bytes, POINT_BYTES};
use crate::{VRFError, VRFKeypair, VRFPrikey, VRFPubkey};

impl VRFKeypair {
    /// Build a new pair of VRF keys
    pub fn new(seed: [u8; 32]) -> Self {
        let scalar = first_nonzero(|counter| derive_scalar(&seed, counter));
        Self::from_private_key(VRFPrikey { scalar })
    }

    /// Build a new pair of VRF keys from rng
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        Self::new(seed)
    }

    pub fn from_private_key(private_key: VRFPrikey) -> Self {
        VRFKeypair {
            public_key: private_key.into(),
            private_key,
        }
    }
}

/// SHA-512 of the seed, with a big-endian counter appended on retries,
/// reduced into the scalar field.
fn derive_scalar(seed: &[u8; 32], counter: u64) -> Fr {
    let mut hasher = Sha512::new();
    hasher.update(seed);
    if counter > 0 {
        hasher.update(counter.to_be_bytes());
    }
    let output: [u8; 64] = hasher.finalize().into();
    // 64 bytes keep the reduction mod Order statistically uniform
    Fr::from_uniform_bytes(&output)
}

/// First nonzero scalar produced by `candidate(0)`, `candidate(1)`, ...
pub(crate) fn first_nonzero(mut candidate: impl FnMut(u64) -> Fr) -> Fr {
    let mut counter = 0u64;
    loop {
        let scalar = candidate(counter);
        if !bool::from(scalar.is_zero()) {
            return scalar;
        }
        counter += 1;
    }
}

impl From<VRFPrikey> for VRFPubkey {
    fn from(sk: VRFPrikey) -> Self {
        VRFPubkey {
            point: (generator().to_curve() * sk.scalar).to_affine(),
        }
    }
}

impl VRFPrikey {
    /// Validate a secret key given as an integer.
    pub fn from_biguint(x: &BigUint) -> Result<Self, VRFError> {
        let scalar = fr_from_biguint(x).ok_or(VRFError::InvalidSecretKey)?;
        if bool::from(scalar.is_zero()) {
            return Err(VRFError::InvalidSecretKey);
        }
        Ok(Self { scalar })
    }

    pub fn to_biguint(&self) -> BigUint {
        biguint_from_fr(&self.scalar)
    }

    /// Convert the private key to a big-endian word.
    pub fn to_bytes(&self) -> [u8; WORD_BYTES] {
        let mut out = [0u8; WORD_BYTES];
        out.copy_from_slice(self.scalar.to_repr().as_ref());
        out.reverse();
        out
    }

    /// Convert a big-endian word to a private key.
    pub fn from_bytes(bytes: &[u8; WORD_BYTES]) -> Result<Self, VRFError> {
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }
}

impl fmt::Debug for VRFPrikey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VRFPrikey(..)")
    }
}

impl VRFPubkey {
    pub fn coordinates(&self) -> Result<(BigUint, BigUint), VRFError> {
        coords_from_point(&self.point)
    }

    pub fn to_bytes(&self) -> Result<[u8; POINT_BYTES], VRFError> {
        point_to_bytes(&self.point)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VRFError> {
        point_from_bytes(bytes).map(|point| Self { point })
    }
}
