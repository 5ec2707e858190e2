//! Byte-level codecs for keys and signatures.
//!
//! Layouts are normative and stable:
//! pk = rho || t1, sk = rho || key || tr || s1 || s2 || t0,
//! sig = c_tilde || z || hint encoding. The hint encoding stores the set
//! coefficient indices row by row in the first omega bytes, followed by one
//! cumulative count per row.

use crate::error::SignError;
use crate::params::{ParameterSet, POLYT0_PACKEDBYTES, POLYT1_PACKEDBYTES, SEEDBYTES};
use crate::polyvec::PolyVec;

/// Bit-pack pk = (rho, t1).
pub fn pack_pk(pk: &mut [u8], rho: &[u8], t1: &PolyVec) {
    pk[..SEEDBYTES].copy_from_slice(rho);
    for (i, p) in t1.vec.iter().enumerate() {
        p.pack_t1(&mut pk[SEEDBYTES + i * POLYT1_PACKEDBYTES..]);
    }
}

/// Unpack pk = (rho, t1).
pub fn unpack_pk(params: &ParameterSet, pk: &[u8]) -> ([u8; SEEDBYTES], PolyVec) {
    let mut rho = [0u8; SEEDBYTES];
    rho.copy_from_slice(&pk[..SEEDBYTES]);
    let mut t1 = PolyVec::new(params.k);
    for (i, p) in t1.vec.iter_mut().enumerate() {
        p.unpack_t1(&pk[SEEDBYTES + i * POLYT1_PACKEDBYTES..]);
    }
    (rho, t1)
}

/// Bit-pack sk = (rho, key, tr, s1, s2, t0).
#[allow(clippy::too_many_arguments)]
pub fn pack_sk(
    params: &ParameterSet,
    sk: &mut [u8],
    rho: &[u8],
    key: &[u8],
    tr: &[u8],
    t0: &PolyVec,
    s1: &PolyVec,
    s2: &PolyVec,
) {
    let mut off = 0;
    sk[off..off + SEEDBYTES].copy_from_slice(rho);
    off += SEEDBYTES;
    sk[off..off + SEEDBYTES].copy_from_slice(key);
    off += SEEDBYTES;
    sk[off..off + SEEDBYTES].copy_from_slice(tr);
    off += SEEDBYTES;

    for p in s1.vec.iter() {
        p.pack_eta(params, &mut sk[off..]);
        off += params.polyeta_packedbytes;
    }
    for p in s2.vec.iter() {
        p.pack_eta(params, &mut sk[off..]);
        off += params.polyeta_packedbytes;
    }
    for p in t0.vec.iter() {
        p.pack_t0(&mut sk[off..]);
        off += POLYT0_PACKEDBYTES;
    }
}

/// Unpack sk; returns (rho, key, tr, t0, s1, s2).
#[allow(clippy::type_complexity)]
pub fn unpack_sk(
    params: &ParameterSet,
    sk: &[u8],
) -> (
    [u8; SEEDBYTES],
    [u8; SEEDBYTES],
    [u8; SEEDBYTES],
    PolyVec,
    PolyVec,
    PolyVec,
) {
    let mut rho = [0u8; SEEDBYTES];
    let mut key = [0u8; SEEDBYTES];
    let mut tr = [0u8; SEEDBYTES];
    let mut off = 0;
    rho.copy_from_slice(&sk[off..off + SEEDBYTES]);
    off += SEEDBYTES;
    key.copy_from_slice(&sk[off..off + SEEDBYTES]);
    off += SEEDBYTES;
    tr.copy_from_slice(&sk[off..off + SEEDBYTES]);
    off += SEEDBYTES;

    let mut s1 = PolyVec::new(params.l);
    for p in s1.vec.iter_mut() {
        p.unpack_eta(params, &sk[off..]);
        off += params.polyeta_packedbytes;
    }
    let mut s2 = PolyVec::new(params.k);
    for p in s2.vec.iter_mut() {
        p.unpack_eta(params, &sk[off..]);
        off += params.polyeta_packedbytes;
    }
    let mut t0 = PolyVec::new(params.k);
    for p in t0.vec.iter_mut() {
        p.unpack_t0(&sk[off..]);
        off += POLYT0_PACKEDBYTES;
    }
    (rho, key, tr, t0, s1, s2)
}

/// Bit-pack sig = (c_tilde, z, h).
pub fn pack_sig(
    params: &ParameterSet,
    sig: &mut [u8],
    c_tilde: &[u8],
    z: &PolyVec,
    h: &PolyVec,
) {
    sig[..SEEDBYTES].copy_from_slice(c_tilde);
    let mut off = SEEDBYTES;
    for p in z.vec.iter() {
        p.pack_z(params, &mut sig[off..]);
        off += params.polyz_packedbytes;
    }

    // hint: indices of set coefficients, then per-row running totals
    for b in sig[off..off + params.omega].iter_mut() {
        *b = 0;
    }
    let mut k = 0usize;
    for (i, p) in h.vec.iter().enumerate() {
        for (j, &c) in p.coeffs.iter().enumerate() {
            if c != 0 {
                sig[off + k] = j as u8;
                k += 1;
            }
        }
        sig[off + params.omega + i] = k as u8;
    }
}

/// Unpack sig; returns (c_tilde, z, h) or an error on any inconsistency in
/// the hint encoding.
pub fn unpack_sig(
    params: &ParameterSet,
    sig: &[u8],
) -> Result<([u8; SEEDBYTES], PolyVec, PolyVec), SignError> {
    let mut c_tilde = [0u8; SEEDBYTES];
    c_tilde.copy_from_slice(&sig[..SEEDBYTES]);

    let mut off = SEEDBYTES;
    let mut z = PolyVec::new(params.l);
    for p in z.vec.iter_mut() {
        p.unpack_z(params, &sig[off..]);
        off += params.polyz_packedbytes;
    }

    let mut h = PolyVec::new(params.k);
    let mut k = 0usize;
    for i in 0..params.k {
        let count = sig[off + params.omega + i] as usize;
        // cumulative counts must be monotone and capped by omega
        if count < k || count > params.omega {
            return Err(SignError::MalformedSignature);
        }
        for j in k..count {
            // indices within a row must be strictly increasing
            if j > k && sig[off + j] <= sig[off + j - 1] {
                return Err(SignError::MalformedSignature);
            }
            h.vec[i].coeffs[sig[off + j] as usize] = 1;
        }
        k = count;
    }
    // unused index slots must be zero
    for j in k..params.omega {
        if sig[off + j] != 0 {
            return Err(SignError::MalformedSignature);
        }
    }

    Ok((c_tilde, z, h))
}
