//! Vectors of ring elements (length L or K) and the expanded public matrix.

use zeroize::Zeroize;

use crate::params::ParameterSet;
use crate::poly::Poly;

/// A vector of polynomials. The length is fixed at construction: L for
/// s1/y/z, K for s2/t/w/h.
#[derive(Clone, Debug, PartialEq, Zeroize)]
pub struct PolyVec {
    pub vec: Vec<Poly>,
}

impl PolyVec {
    pub fn new(len: usize) -> Self {
        PolyVec {
            vec: vec![Poly::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Sample every polynomial in [-eta, eta], consuming one nonce each.
    pub fn uniform_eta(&mut self, params: &ParameterSet, seed: &[u8], mut nonce: u16) {
        for p in self.vec.iter_mut() {
            p.uniform_eta(params, seed, nonce);
            nonce += 1;
        }
    }

    /// Sample every polynomial in (-gamma1, gamma1]; polynomial i uses
    /// nonce L*nonce + i.
    pub fn uniform_gamma1(&mut self, params: &ParameterSet, seed: &[u8], nonce: u16) {
        let l = self.vec.len() as u16;
        for (i, p) in self.vec.iter_mut().enumerate() {
            p.uniform_gamma1(params, seed, l * nonce + i as u16);
        }
    }

    pub fn reduce(&mut self) {
        for p in self.vec.iter_mut() {
            p.reduce();
        }
    }

    pub fn caddq(&mut self) {
        for p in self.vec.iter_mut() {
            p.caddq();
        }
    }

    /// self += v, without modular reduction.
    pub fn add(&mut self, v: &PolyVec) {
        for (a, b) in self.vec.iter_mut().zip(v.vec.iter()) {
            a.add(b);
        }
    }

    /// self -= v, without modular reduction.
    pub fn sub(&mut self, v: &PolyVec) {
        for (a, b) in self.vec.iter_mut().zip(v.vec.iter()) {
            a.sub(b);
        }
    }

    /// Multiply every coefficient by 2^D.
    pub fn shiftl(&mut self) {
        for p in self.vec.iter_mut() {
            p.shiftl();
        }
    }

    pub fn ntt(&mut self) {
        for p in self.vec.iter_mut() {
            p.ntt();
        }
    }

    pub fn invntt_tomont(&mut self) {
        for p in self.vec.iter_mut() {
            p.invntt_tomont();
        }
    }

    /// self = a * v slotwise in the NTT domain.
    pub fn pointwise_poly_montgomery(&mut self, a: &Poly, v: &PolyVec) {
        for (r, p) in self.vec.iter_mut().zip(v.vec.iter()) {
            Poly::pointwise_montgomery(r, a, p);
        }
    }

    /// True if any coefficient of any polynomial reaches the bound.
    pub fn chknorm(&self, bound: i32) -> bool {
        self.vec.iter().any(|p| p.chknorm(bound))
    }

    /// Power-of-two rounding of every coefficient; returns (low, high).
    pub fn power2round(&self) -> (PolyVec, PolyVec) {
        let mut v0 = PolyVec::new(self.vec.len());
        let mut v1 = PolyVec::new(self.vec.len());
        for (i, p) in self.vec.iter().enumerate() {
            let (a0, a1) = p.power2round();
            v0.vec[i] = a0;
            v1.vec[i] = a1;
        }
        (v0, v1)
    }

    /// Decomposition of every coefficient at alpha = 2*gamma2; returns
    /// (low, high).
    pub fn decompose(&self, params: &ParameterSet) -> (PolyVec, PolyVec) {
        let mut v0 = PolyVec::new(self.vec.len());
        let mut v1 = PolyVec::new(self.vec.len());
        for (i, p) in self.vec.iter().enumerate() {
            let (a0, a1) = p.decompose(params.gamma2);
            v0.vec[i] = a0;
            v1.vec[i] = a1;
        }
        (v0, v1)
    }

    /// Hint vector from low/high parts, plus the total number of set bits.
    pub fn make_hint(v0: &PolyVec, v1: &PolyVec, params: &ParameterSet) -> (PolyVec, usize) {
        let mut h = PolyVec::new(v0.vec.len());
        let mut ones = 0usize;
        for i in 0..v0.vec.len() {
            let (hp, n) = Poly::make_hint(&v0.vec[i], &v1.vec[i], params.gamma2);
            h.vec[i] = hp;
            ones += n;
        }
        (h, ones)
    }

    /// Corrected high bits of self according to the hint vector.
    pub fn use_hint(&self, h: &PolyVec, params: &ParameterSet) -> PolyVec {
        let mut w = PolyVec::new(self.vec.len());
        for (i, p) in self.vec.iter().enumerate() {
            w.vec[i] = p.use_hint(&h.vec[i], params.gamma2);
        }
        w
    }

    /// Pack the high bits of every polynomial into `r`, row by row.
    pub fn pack_w1(&self, params: &ParameterSet, r: &mut [u8]) {
        for (i, p) in self.vec.iter().enumerate() {
            p.pack_w1(params, &mut r[i * params.polyw1_packedbytes..]);
        }
    }
}

/// ExpandA: the K x L matrix over R_q derived from rho, row i / column j
/// sampled from SHAKE128(rho || nonce) with nonce = (i << 8) | j. Rows are
/// already in the NTT domain by construction.
pub fn matrix_expand(params: &ParameterSet, rho: &[u8]) -> Vec<PolyVec> {
    let mut mat = vec![PolyVec::new(params.l); params.k];
    for (i, row) in mat.iter_mut().enumerate() {
        for (j, p) in row.vec.iter_mut().enumerate() {
            p.uniform(rho, ((i as u16) << 8) | j as u16);
        }
    }
    mat
}

/// t = mat * v with v in NTT domain; one accumulated pointwise product per
/// row.
pub fn matrix_pointwise_montgomery(t: &mut PolyVec, mat: &[PolyVec], v: &PolyVec) {
    for (row, out) in mat.iter().zip(t.vec.iter_mut()) {
        pointwise_acc_montgomery(out, row, v);
    }
}

/// w = sum_i u[i] * v[i], Montgomery-reduced slotwise.
pub fn pointwise_acc_montgomery(w: &mut Poly, u: &PolyVec, v: &PolyVec) {
    let mut t = Poly::default();
    Poly::pointwise_montgomery(w, &u.vec[0], &v.vec[0]);
    for i in 1..u.vec.len() {
        Poly::pointwise_montgomery(&mut t, &u.vec[i], &v.vec[i]);
        w.add(&t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DILITHIUM2, DILITHIUM5, N, Q};

    #[test]
    fn matrix_expand_is_deterministic_and_nonce_separated() {
        let rho = [5u8; 32];
        let a = matrix_expand(&DILITHIUM2, &rho);
        let b = matrix_expand(&DILITHIUM2, &rho);
        assert_eq!(a.len(), DILITHIUM2.k);
        for (ra, rb) in a.iter().zip(b.iter()) {
            assert_eq!(ra.vec.len(), DILITHIUM2.l);
            for (pa, pb) in ra.vec.iter().zip(rb.vec.iter()) {
                assert_eq!(pa.coeffs, pb.coeffs);
                assert!(pa.coeffs.iter().all(|&c| (0..Q).contains(&c)));
            }
        }
        // distinct matrix entries
        assert!(a[0].vec[0].coeffs != a[0].vec[1].coeffs);
        assert!(a[0].vec[0].coeffs != a[1].vec[0].coeffs);
    }

    #[test]
    fn pointwise_acc_uses_every_slot() {
        // u . v with u = (1, 1, ..., 1) in NTT slots picks up every v[i];
        // a broken accumulator that reuses slot 0 would miss the markers.
        let l = DILITHIUM5.l;
        let mut u = PolyVec::new(l);
        let mut v = PolyVec::new(l);
        for i in 0..l {
            for j in 0..N {
                u.vec[i].coeffs[j] = 1;
                v.vec[i].coeffs[j] = (i as i32 + 1) << 8;
            }
        }
        let mut w = Poly::default();
        pointwise_acc_montgomery(&mut w, &u, &v);

        let mut single = Poly::default();
        let expect: i32 = (1..=l as i32).map(|x| x << 8).sum();
        let mut ones = Poly::default();
        let mut sum = Poly::default();
        for j in 0..N {
            ones.coeffs[j] = 1;
            sum.coeffs[j] = expect;
        }
        Poly::pointwise_montgomery(&mut single, &ones, &sum);
        for j in 0..N {
            // representatives may differ by q between the accumulated and
            // one-shot products; compare canonical residues
            assert_eq!(
                crate::reduce::freeze(w.coeffs[j]),
                crate::reduce::freeze(single.coeffs[j])
            );
        }
    }

    #[test]
    fn decompose_covers_every_row() {
        let k = DILITHIUM2.k;
        let mut v = PolyVec::new(k);
        for (i, p) in v.vec.iter_mut().enumerate() {
            for c in p.coeffs.iter_mut() {
                *c = (i as i32 + 1) * 100_003 % Q;
            }
        }
        let (v0, v1) = v.decompose(&DILITHIUM2);
        let alpha = 2 * DILITHIUM2.gamma2;
        for i in 0..k {
            for j in 0..N {
                let recon = (v1.vec[i].coeffs[j] as i64 * alpha as i64
                    + v0.vec[i].coeffs[j] as i64)
                    .rem_euclid(Q as i64);
                assert_eq!(recon, v.vec[i].coeffs[j] as i64);
            }
        }
    }
}
