//! Owned key objects over the byte-level engine.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::SignError;
use crate::params::{SecurityLevel, SEEDBYTES};
use crate::sign;

/// A Dilithium keypair bound to its security level.
///
/// The secret key bytes are zeroized when the keypair is dropped.
pub struct KeyPair {
    level: SecurityLevel,
    public_key: Vec<u8>,
    secret_key: Vec<u8>,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("level", &self.level)
            .field("public_key_len", &self.public_key.len())
            .field("secret_key_len", &self.secret_key.len())
            .finish()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

impl KeyPair {
    /// Generate a fresh keypair from the provided RNG.
    pub fn generate<R: CryptoRng + RngCore>(level: SecurityLevel, rng: &mut R) -> Self {
        let (public_key, secret_key) = sign::keypair(level, rng);
        Self {
            level,
            public_key,
            secret_key,
        }
    }

    /// Deterministic keypair from a 32-byte seed, for reproducible tests and
    /// known-answer validation.
    pub fn from_seed(level: SecurityLevel, seed: &[u8; SEEDBYTES]) -> Self {
        let (public_key, secret_key) = sign::keypair_from_seed(level, seed);
        Self {
            level,
            public_key,
            secret_key,
        }
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// Detached signature over `message`.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        sign::signature(self.level, message, &self.secret_key)
    }

    /// Signed message, signature followed by the payload.
    pub fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        sign::sign(self.level, message, &self.secret_key)
    }

    /// The verification half of this keypair.
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey {
            level: self.level,
            bytes: self.public_key.clone(),
        }
    }
}

/// A Dilithium public key bound to its security level.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    level: SecurityLevel,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey")
            .field("level", &self.level)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PublicKey {
    /// Wrap public key bytes, checking the length for the level.
    pub fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self, SignError> {
        let expected = level.params().public_key_bytes;
        if bytes.len() != expected {
            return Err(SignError::InvalidPublicKeyLength {
                expected,
                found: bytes.len(),
            });
        }
        Ok(Self {
            level,
            bytes: bytes.to_vec(),
        })
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Verify a detached signature over `message`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), SignError> {
        sign::verify(self.level, signature, message, &self.bytes)
    }

    /// Verify a signed message and recover its payload.
    pub fn open(&self, signed_message: &[u8]) -> Result<Vec<u8>, SignError> {
        sign::open(self.level, signed_message, &self.bytes)
    }
}
