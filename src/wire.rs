//! Fixed-width proof layout handed to the on-chain verifier:
//! `pk.x, pk.y, gamma.x, gamma.y, c, s, seed, output`, one word each.
use std::fmt;

use num_bigint::BigUint;

use crate::field::biguint_from_fq;
use crate::hash::{pack_uint256s, WORD_BYTES};
use crate::point::{coords_from_point, point_from_bytes, POINT_BYTES};
use crate::{VRFError, VRFProof};

/// Length of a marshalled proof.
pub const PROOF_BYTES: usize = 8 * WORD_BYTES;

impl VRFProof {
    pub fn to_words(&self) -> Result<Vec<u8>, VRFError> {
        let (pk_x, pk_y) = coords_from_point(&self.public_key)?;
        let (gamma_x, gamma_y) = coords_from_point(&self.gamma)?;
        pack_uint256s(&[
            &pk_x,
            &pk_y,
            &gamma_x,
            &gamma_y,
            &self.c,
            &self.s,
            &self.seed,
            &self.output,
        ])
    }

    /// Parse a marshalled proof. Both points must be on the curve; the proof
    /// itself is not checked.
    pub fn from_words(bytes: &[u8]) -> Result<Self, VRFError> {
        if bytes.len() != PROOF_BYTES {
            return Err(VRFError::InvalidLength {
                expected: PROOF_BYTES,
                actual: bytes.len(),
            });
        }
        let (points, scalars) = bytes.split_at(2 * POINT_BYTES);
        let public_key = point_from_bytes(&points[..POINT_BYTES])?;
        let gamma = point_from_bytes(&points[POINT_BYTES..])?;
        let mut words = scalars.chunks_exact(WORD_BYTES).map(BigUint::from_bytes_be);
        // chunks_exact over 4 words always yields 4 items
        let (Some(c), Some(s), Some(seed), Some(output)) =
            (words.next(), words.next(), words.next(), words.next())
        else {
            return Err(VRFError::InvalidLength {
                expected: PROOF_BYTES,
                actual: bytes.len(),
            });
        };

        Ok(VRFProof {
            public_key,
            gamma,
            c,
            s,
            seed,
            output,
        })
    }
}

impl fmt::Display for VRFProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // raw coordinates, so malformed points still print
        let (pk_x, pk_y) = (biguint_from_fq(&self.public_key.x), biguint_from_fq(&self.public_key.y));
        let (gamma_x, gamma_y) = (biguint_from_fq(&self.gamma.x), biguint_from_fq(&self.gamma.y));
        write!(
            f,
            "VRFProof{{public_key: ({pk_x:#x}, {pk_y:#x}), gamma: ({gamma_x:#x}, {gamma_y:#x}), \
             c: {:#x}, s: {:#x}, seed: {:#x}, output: {:#x}}}",
            self.c, self.s, self.seed, self.output
        )
    }
}
