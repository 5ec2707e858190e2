#![deny(unsafe_code)]

//! CRYSTALS-Dilithium digital signatures in pure Rust.
//!
//! This crate implements the round-3 Dilithium signature scheme over the
//! ring Z_q[X]/(X^256 + 1) with q = 8380417:
//! - lattice arithmetic with a Montgomery-form NTT
//! - deterministic matrix/vector expansion from seeds via SHAKE
//! - the Fiat-Shamir-with-aborts signing loop with hint compression
//! - bit-exact packing of keys and signatures
//!
//! All three security modes (2, 3 and 5) are supported through a
//! per-instance [`SecurityLevel`]; different modes can be used concurrently.
//!
//! # Example
//!
//! ```rust
//! use dilithium_crypto::{KeyPair, SecurityLevel};
//!
//! let mut rng = rand::thread_rng();
//! let keypair = KeyPair::generate(SecurityLevel::Dilithium2, &mut rng);
//!
//! let message = b"post-quantum signatures";
//! let signature = keypair.sign(message).unwrap();
//!
//! let public_key = keypair.to_public_key();
//! assert!(public_key.verify(message, &signature).is_ok());
//! ```

pub mod error;
pub mod keys;
pub mod ntt;
pub mod packing;
pub mod params;
pub mod poly;
pub mod polyvec;
pub mod reduce;
pub mod rounding;
pub mod sign;
pub mod xof;

pub use error::SignError;
pub use keys::{KeyPair, PublicKey};
pub use params::{ParameterSet, SecurityLevel};
