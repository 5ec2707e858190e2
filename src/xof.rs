//! SHAKE stream adapter.
//!
//! The samplers consume SHAKE128/SHAKE256 output block by block; this module
//! wraps the `sha3` XOF readers behind the two initialization patterns the
//! scheme uses: absorb seed then a 16-bit little-endian nonce, or absorb an
//! arbitrary sequence of byte strings.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

/// SHAKE128 rate in bytes.
pub const SHAKE128_RATE: usize = 168;
/// SHAKE256 rate in bytes.
pub const SHAKE256_RATE: usize = 136;

/// Squeezing handle over SHAKE128, seeded with seed || nonce_le16.
pub struct Shake128Stream {
    reader: Shake128Reader,
}

impl Shake128Stream {
    pub fn new(seed: &[u8], nonce: u16) -> Self {
        let mut state = Shake128::default();
        state.update(seed);
        state.update(&nonce.to_le_bytes());
        Self {
            reader: state.finalize_xof(),
        }
    }

    /// Fill `out` with the next squeeze output. Callers size `out` in whole
    /// blocks of [`SHAKE128_RATE`] bytes.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

/// Squeezing handle over SHAKE256.
pub struct Shake256Stream {
    reader: Shake256Reader,
}

impl Shake256Stream {
    /// Seeded with seed || nonce_le16, the vector-sampling contract.
    pub fn new(seed: &[u8], nonce: u16) -> Self {
        let mut state = Shake256::default();
        state.update(seed);
        state.update(&nonce.to_le_bytes());
        Self {
            reader: state.finalize_xof(),
        }
    }

    /// Seeded with the concatenation of `inputs`, no nonce.
    pub fn absorb(inputs: &[&[u8]]) -> Self {
        let mut state = Shake256::default();
        for part in inputs {
            state.update(part);
        }
        Self {
            reader: state.finalize_xof(),
        }
    }

    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

/// One-shot SHAKE256 of the concatenation of `inputs`.
pub fn shake256(out: &mut [u8], inputs: &[&[u8]]) {
    Shake256Stream::absorb(inputs).squeeze(out);
}
