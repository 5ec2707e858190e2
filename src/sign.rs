//! Key generation, the Fiat-Shamir-with-aborts signing loop and
//! verification, over the byte-level key and signature formats.

use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::error::SignError;
use crate::packing::{pack_pk, pack_sig, pack_sk, unpack_pk, unpack_sig, unpack_sk};
use crate::params::{SecurityLevel, CRHBYTES, SEEDBYTES};
use crate::poly::Poly;
use crate::polyvec::{matrix_expand, matrix_pointwise_montgomery, PolyVec};
use crate::xof::shake256;

/// Defensive cap on the rejection loop. Expected iterations are 4-7 per
/// mode, so the cap never changes outputs in practice.
const MAX_SIGN_ATTEMPTS: usize = 1000;

/// Generate a keypair from fresh randomness. Returns (pk, sk) bytes.
pub fn keypair<R: CryptoRng + RngCore>(level: SecurityLevel, rng: &mut R) -> (Vec<u8>, Vec<u8>) {
    let mut seed = [0u8; SEEDBYTES];
    rng.fill_bytes(&mut seed);
    let out = keypair_from_seed(level, &seed);
    seed.zeroize();
    out
}

/// Deterministic keypair from a 32-byte seed. Returns (pk, sk) bytes.
pub fn keypair_from_seed(level: SecurityLevel, seed: &[u8; SEEDBYTES]) -> (Vec<u8>, Vec<u8>) {
    let p = level.params();

    // rho || rho' || key
    let mut seedbuf = [0u8; 2 * SEEDBYTES + CRHBYTES];
    shake256(&mut seedbuf, &[seed]);
    let (rho, rest) = seedbuf.split_at(SEEDBYTES);
    let (rhoprime, key) = rest.split_at(CRHBYTES);

    let mat = matrix_expand(p, rho);

    let mut s1 = PolyVec::new(p.l);
    s1.uniform_eta(p, rhoprime, 0);
    let mut s2 = PolyVec::new(p.k);
    s2.uniform_eta(p, rhoprime, p.l as u16);

    // t = InvNTT(A * NTT(s1)) + s2
    let mut s1hat = s1.clone();
    s1hat.ntt();
    let mut t = PolyVec::new(p.k);
    matrix_pointwise_montgomery(&mut t, &mat, &s1hat);
    t.reduce();
    t.invntt_tomont();
    t.add(&s2);
    t.caddq();

    let (mut t0, t1) = t.power2round();

    let mut pk = vec![0u8; p.public_key_bytes];
    pack_pk(&mut pk, rho, &t1);

    let mut tr = [0u8; SEEDBYTES];
    shake256(&mut tr, &[&pk]);

    let mut sk = vec![0u8; p.secret_key_bytes];
    pack_sk(p, &mut sk, rho, key, &tr, &t0, &s1, &s2);

    debug!(mode = level.mode(), "generated keypair");
    s1.zeroize();
    s2.zeroize();
    s1hat.zeroize();
    t0.zeroize();
    seedbuf.zeroize();
    (pk, sk)
}

/// Produce a detached signature over `msg`. Signing is deterministic: the
/// per-signature randomness is derived from the key and the message.
pub fn signature(level: SecurityLevel, msg: &[u8], sk: &[u8]) -> Result<Vec<u8>, SignError> {
    let p = level.params();
    if sk.len() != p.secret_key_bytes {
        return Err(SignError::InvalidSecretKeyLength {
            expected: p.secret_key_bytes,
            found: sk.len(),
        });
    }

    let (rho, mut key, tr, mut t0, mut s1, mut s2) = unpack_sk(p, sk);

    // mu = CRH(tr || msg), rho' = CRH(key || mu)
    let mut mu = [0u8; CRHBYTES];
    shake256(&mut mu, &[&tr, msg]);
    let mut rhoprime = [0u8; CRHBYTES];
    shake256(&mut rhoprime, &[&key, &mu]);

    let mat = matrix_expand(p, &rho);
    s1.ntt();
    s2.ntt();
    t0.ntt();

    let mut w1_packed = vec![0u8; p.k * p.polyw1_packedbytes];
    let mut packed: Option<Vec<u8>> = None;
    let mut nonce: u16 = 0;

    for attempt in 0..MAX_SIGN_ATTEMPTS {
        // fresh masking vector
        let mut y = PolyVec::new(p.l);
        y.uniform_gamma1(p, &rhoprime, nonce);
        nonce += 1;

        // w = InvNTT(A * NTT(y))
        let mut yhat = y.clone();
        yhat.ntt();
        let mut w = PolyVec::new(p.k);
        matrix_pointwise_montgomery(&mut w, &mat, &yhat);
        w.reduce();
        w.invntt_tomont();
        w.caddq();
        let (mut w0, w1) = w.decompose(p);

        w1.pack_w1(p, &mut w1_packed);
        let mut c_tilde = [0u8; SEEDBYTES];
        shake256(&mut c_tilde, &[&mu, &w1_packed]);

        let mut cp = Poly::default();
        cp.challenge(p, &c_tilde);
        cp.ntt();

        // z = y + InvNTT(c * s1); must not leak the secret
        let mut z = PolyVec::new(p.l);
        z.pointwise_poly_montgomery(&cp, &s1);
        z.invntt_tomont();
        z.add(&y);
        z.reduce();
        if z.chknorm(p.gamma1 - p.beta) {
            continue;
        }

        // subtracting c*s2 must not change the high bits of w
        let mut h = PolyVec::new(p.k);
        h.pointwise_poly_montgomery(&cp, &s2);
        h.invntt_tomont();
        w0.sub(&h);
        w0.reduce();
        if w0.chknorm(p.gamma2 - p.beta) {
            continue;
        }

        // c*t0 must stay small enough for the hint to compensate
        h.pointwise_poly_montgomery(&cp, &t0);
        h.invntt_tomont();
        h.reduce();
        if h.chknorm(p.gamma2) {
            continue;
        }

        w0.add(&h);
        let (hint, ones) = PolyVec::make_hint(&w0, &w1, p);
        if ones > p.omega {
            continue;
        }

        trace!(mode = level.mode(), attempts = attempt + 1, "signature accepted");
        let mut sig = vec![0u8; p.signature_bytes];
        pack_sig(p, &mut sig, &c_tilde, &z, &hint);
        packed = Some(sig);
        break;
    }

    s1.zeroize();
    s2.zeroize();
    t0.zeroize();
    key.zeroize();
    rhoprime.zeroize();
    packed.ok_or(SignError::RejectionSamplingFailed)
}

/// Verify a detached signature. Returns Ok(()) exactly when the signature
/// is valid for `msg` under `pk`.
pub fn verify(level: SecurityLevel, sig: &[u8], msg: &[u8], pk: &[u8]) -> Result<(), SignError> {
    let p = level.params();
    if pk.len() != p.public_key_bytes {
        return Err(SignError::InvalidPublicKeyLength {
            expected: p.public_key_bytes,
            found: pk.len(),
        });
    }
    if sig.len() != p.signature_bytes {
        return Err(SignError::InvalidSignatureLength {
            expected: p.signature_bytes,
            found: sig.len(),
        });
    }

    let (rho, mut t1) = unpack_pk(p, pk);
    let (c_tilde, mut z, h) = unpack_sig(p, sig)?;
    if z.chknorm(p.gamma1 - p.beta) {
        debug!("rejecting signature: z norm out of bounds");
        return Err(SignError::VerificationFailed);
    }

    // mu = CRH(H(rho, t1) || msg)
    let mut tr = [0u8; SEEDBYTES];
    shake256(&mut tr, &[pk]);
    let mut mu = [0u8; CRHBYTES];
    shake256(&mut mu, &[&tr, msg]);

    // w1' = UseHint(h, A*z - c * t1*2^D)
    let mut cp = Poly::default();
    cp.challenge(p, &c_tilde);
    let mat = matrix_expand(p, &rho);

    z.ntt();
    let mut w1 = PolyVec::new(p.k);
    matrix_pointwise_montgomery(&mut w1, &mat, &z);

    cp.ntt();
    t1.shiftl();
    t1.ntt();
    let mut ct1 = PolyVec::new(p.k);
    ct1.pointwise_poly_montgomery(&cp, &t1);

    w1.sub(&ct1);
    w1.reduce();
    w1.invntt_tomont();
    w1.caddq();
    let w1 = w1.use_hint(&h, p);

    let mut buf = vec![0u8; p.k * p.polyw1_packedbytes];
    w1.pack_w1(p, &mut buf);

    let mut c2 = [0u8; SEEDBYTES];
    shake256(&mut c2, &[&mu, &buf]);

    if bool::from(c_tilde[..].ct_eq(&c2[..])) {
        Ok(())
    } else {
        debug!("rejecting signature: challenge mismatch");
        Err(SignError::VerificationFailed)
    }
}

/// Produce a signed message sm = sig || msg.
pub fn sign(level: SecurityLevel, msg: &[u8], sk: &[u8]) -> Result<Vec<u8>, SignError> {
    let sig = signature(level, msg, sk)?;
    let mut sm = Vec::with_capacity(sig.len() + msg.len());
    sm.extend_from_slice(&sig);
    sm.extend_from_slice(msg);
    Ok(sm)
}

/// Verify a signed message and recover its payload.
pub fn open(level: SecurityLevel, sm: &[u8], pk: &[u8]) -> Result<Vec<u8>, SignError> {
    let p = level.params();
    if sm.len() < p.signature_bytes {
        return Err(SignError::SignedMessageTooShort);
    }
    let (sig, msg) = sm.split_at(p.signature_bytes);
    verify(level, sig, msg, pk)?;
    Ok(msg.to_vec())
}
