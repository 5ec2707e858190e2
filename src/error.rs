use thiserror::Error;

/// Errors that can occur during keypair, signing and verification operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignError {
    /// Unsupported numeric security mode
    #[error("Unsupported security mode {0}, expected 2, 3 or 5")]
    UnsupportedMode(u8),

    /// Public key bytes have the wrong length for the chosen mode
    #[error("Invalid public key length: expected {expected}, found {found}")]
    InvalidPublicKeyLength { expected: usize, found: usize },

    /// Secret key bytes have the wrong length for the chosen mode
    #[error("Invalid secret key length: expected {expected}, found {found}")]
    InvalidSecretKeyLength { expected: usize, found: usize },

    /// Signature bytes have the wrong length for the chosen mode
    #[error("Invalid signature length: expected {expected}, found {found}")]
    InvalidSignatureLength { expected: usize, found: usize },

    /// The hint encoding inside a signature is inconsistent
    #[error("Malformed signature encoding")]
    MalformedSignature,

    /// Signature verification failed
    #[error("Signature verification failed")]
    VerificationFailed,

    /// Signed message shorter than a detached signature
    #[error("Signed message too short to contain a signature")]
    SignedMessageTooShort,

    /// Rejection sampling exceeded the defensive iteration cap
    #[error("Rejection sampling failed after maximum attempts")]
    RejectionSamplingFailed,
}
