use thiserror::Error;

#[derive(Debug, Error)]
pub enum VRFError {
    #[error("value of {0} bytes does not fit in a 32-byte word")]
    WordOverflow(usize),

    #[error("invalid curve point: {0}")]
    InvalidPoint(String),

    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("randomness source failed: {0}")]
    Randomness(String),

    #[error("secret key must be in [1, group order)")]
    InvalidSecretKey,

    #[error("cannot hash into an empty range")]
    ZeroModulus,
}

impl VRFError {
    /// True for failures to pack or parse the on-chain word encoding.
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            VRFError::WordOverflow(_) | VRFError::InvalidPoint(_) | VRFError::InvalidLength { .. }
        )
    }
}
