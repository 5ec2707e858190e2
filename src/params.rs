//! Dilithium parameter sets.
//!
//! Each security mode freezes the dimensions and rejection bounds of the
//! scheme together with every byte length derived from them. The records are
//! plain `static`s: callers pick a [`SecurityLevel`] per key and may use
//! several modes concurrently.

use serde::{Deserialize, Serialize};

use crate::error::SignError;

/// Length of the ring, fixed for every mode.
pub const N: usize = 256;
/// Prime modulus q = 2^23 - 2^13 + 1.
pub const Q: i32 = 8380417;
/// Number of bits dropped from t by power-of-two rounding.
pub const D: usize = 13;
/// 1753 is a primitive 512th root of unity mod q.
pub const ROOT_OF_UNITY: i32 = 1753;

/// Length of seeds (rho, key, tr, c-tilde) in bytes.
pub const SEEDBYTES: usize = 32;
/// Length of collision-resistant hashes (mu, rho-prime) in bytes.
pub const CRHBYTES: usize = 64;

/// Packed bytes of a polynomial with 10-bit coefficients (t1).
pub const POLYT1_PACKEDBYTES: usize = 320;
/// Packed bytes of a polynomial with 13-bit coefficients (t0).
pub const POLYT0_PACKEDBYTES: usize = 416;

/// A frozen Dilithium parameter record.
///
/// Field names follow the scheme's notation; the `*_packedbytes` fields are
/// the per-polynomial codec widths that vary with eta, gamma1 and gamma2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    /// Rows of the public matrix A (length of t, s2, w, h).
    pub k: usize,
    /// Columns of the public matrix A (length of s1, y, z).
    pub l: usize,
    /// Secret coefficients are sampled from [-eta, eta].
    pub eta: i32,
    /// Number of +-1 coefficients in the challenge polynomial.
    pub tau: usize,
    /// beta = tau * eta, the rejection margin.
    pub beta: i32,
    /// Range bound for the masking vector y.
    pub gamma1: i32,
    /// Low-order rounding range, alpha = 2 * gamma2.
    pub gamma2: i32,
    /// Maximum total weight of the hint vector.
    pub omega: usize,
    pub polyeta_packedbytes: usize,
    pub polyz_packedbytes: usize,
    pub polyw1_packedbytes: usize,
    /// SHAKE256 blocks squeezed up front when sampling an eta polynomial.
    pub poly_uniform_eta_nblocks: usize,
    /// SHAKE256 blocks squeezed when sampling a gamma1 polynomial.
    pub poly_uniform_gamma1_nblocks: usize,
    /// Byte length of a packed public key.
    pub public_key_bytes: usize,
    /// Byte length of a packed secret key.
    pub secret_key_bytes: usize,
    /// Byte length of a detached signature.
    pub signature_bytes: usize,
}

impl ParameterSet {
    /// Packed bytes of the hint vector: omega index slots plus one running
    /// total per row.
    pub const fn polyvech_packedbytes(&self) -> usize {
        self.omega + self.k
    }
}

/// Dilithium2: K=4, L=4, eta=2. NIST security category 2.
pub static DILITHIUM2: ParameterSet = ParameterSet {
    k: 4,
    l: 4,
    eta: 2,
    tau: 39,
    beta: 78,
    gamma1: 1 << 17,
    gamma2: (Q - 1) / 88,
    omega: 80,
    polyeta_packedbytes: 96,
    polyz_packedbytes: 576,
    polyw1_packedbytes: 192,
    poly_uniform_eta_nblocks: 1,
    poly_uniform_gamma1_nblocks: 5,
    public_key_bytes: 1312,
    secret_key_bytes: 2528,
    signature_bytes: 2420,
};

/// Dilithium3: K=6, L=5, eta=4. NIST security category 3.
pub static DILITHIUM3: ParameterSet = ParameterSet {
    k: 6,
    l: 5,
    eta: 4,
    tau: 49,
    beta: 196,
    gamma1: 1 << 19,
    gamma2: (Q - 1) / 32,
    omega: 55,
    polyeta_packedbytes: 128,
    polyz_packedbytes: 640,
    polyw1_packedbytes: 128,
    poly_uniform_eta_nblocks: 2,
    poly_uniform_gamma1_nblocks: 5,
    public_key_bytes: 1952,
    secret_key_bytes: 4000,
    signature_bytes: 3293,
};

/// Dilithium5: K=8, L=7, eta=2. NIST security category 5.
pub static DILITHIUM5: ParameterSet = ParameterSet {
    k: 8,
    l: 7,
    eta: 2,
    tau: 60,
    beta: 120,
    gamma1: 1 << 19,
    gamma2: (Q - 1) / 32,
    omega: 75,
    polyeta_packedbytes: 96,
    polyz_packedbytes: 640,
    polyw1_packedbytes: 128,
    poly_uniform_eta_nblocks: 1,
    poly_uniform_gamma1_nblocks: 5,
    public_key_bytes: 2592,
    secret_key_bytes: 4864,
    signature_bytes: 4595,
};

/// Security mode selector.
///
/// The numeric modes 2, 3 and 5 match the round-3 CRYSTALS-Dilithium
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityLevel {
    Dilithium2,
    Dilithium3,
    Dilithium5,
}

impl SecurityLevel {
    /// Resolve a numeric mode. Anything outside {2, 3, 5} is rejected.
    pub fn from_mode(mode: u8) -> Result<Self, SignError> {
        match mode {
            2 => Ok(Self::Dilithium2),
            3 => Ok(Self::Dilithium3),
            5 => Ok(Self::Dilithium5),
            other => Err(SignError::UnsupportedMode(other)),
        }
    }

    /// The numeric mode of this level.
    pub fn mode(self) -> u8 {
        match self {
            Self::Dilithium2 => 2,
            Self::Dilithium3 => 3,
            Self::Dilithium5 => 5,
        }
    }

    /// The frozen parameter record for this level.
    pub fn params(self) -> &'static ParameterSet {
        match self {
            Self::Dilithium2 => &DILITHIUM2,
            Self::Dilithium3 => &DILITHIUM3,
            Self::Dilithium5 => &DILITHIUM5,
        }
    }
}
