//! Miller loops, direct and with precomputed G2 lines.

use super::Pairing;
use super::line::{add_line_without_p, adjusted, dbl_line_without_p, update_line};
use crate::field::{Fp, Fp2, Fp6, Fp12};
use crate::group::{G1, G2};
use crate::{Error, Result};
use alloc::{vec, vec::Vec};

type Affine<'a> = (Fp<'a>, Fp<'a>);

impl Pairing {
    /// Miller loop `f_{T,Q}(P)` of the optimal ate pairing, before the final
    /// exponentiation. Returns one if either point is the identity.
    pub fn miller_loop<'a>(&'a self, p: &G1<'a>, q: &G2<'a>) -> Fp12<'a> {
        let (Some(p), Some(q)) = (p.to_affine(), q.to_affine()) else {
            return Fp12::one(&self.cfg);
        };
        let q = G2::new_unchecked(q.0, q.1, Fp2::one(&self.cfg));
        let neg_q = -q;
        let adj_p = adjusted(&p);
        let si = &self.params.si;

        let mut t = q;
        let d = update_line(&dbl_line_without_p(&mut t), &adj_p);
        let mut f = if si[1] != 0 {
            let addend = if si[1] > 0 { &q } else { &neg_q };
            let e = update_line(&add_line_without_p(&mut t, addend), &p);
            self.mul_sparse2(&d, &e)
        } else {
            self.convert_line(&d)
        };

        for &digit in &si[2..] {
            let l = update_line(&dbl_line_without_p(&mut t), &adj_p);
            f = self.mul_sparse(&f.square(), &l);
            if digit != 0 {
                let addend = if digit > 0 { &q } else { &neg_q };
                let l = update_line(&add_line_without_p(&mut t, addend), &p);
                f = self.mul_sparse(&f, &l);
            }
        }

        if self.params.is_negative() {
            t = -t;
            f = f.conjugate();
        }
        if let Some([d, e]) = self.family.miller_loop_extra_steps(&mut t, &q) {
            f *= self.mul_sparse2(&update_line(&d, &p), &update_line(&e, &p));
        }
        f
    }

    /// Product of two Miller loops `f_{Q1}(P1) f_{Q2}(P2)` sharing the
    /// squarings.
    pub fn miller_loop2<'a>(
        &'a self,
        p1: &G1<'a>,
        q1: &G2<'a>,
        p2: &G1<'a>,
        q2: &G2<'a>,
    ) -> Fp12<'a> {
        let c1 = self.precompute_g2(q1);
        let c2 = self.precompute_g2(q2);
        self.dual_loop(p1, &c1, p2, &c2)
    }

    /// Records the point-independent line coefficients of the Miller loop
    /// for `q`, in loop order.
    ///
    /// The identity yields all-zero coefficients, which
    /// [`Pairing::precomputed_miller_loop`] treats as a loop value of one.
    pub fn precompute_g2<'a>(&'a self, q: &G2<'a>) -> Vec<Fp6<'a>> {
        let len = self.params.precomputed_len;
        let Some(q) = q.to_affine() else {
            return vec![Fp6::zero(&self.cfg); len];
        };
        let q = G2::new_unchecked(q.0, q.1, Fp2::one(&self.cfg));
        let neg_q = -q;
        let si = &self.params.si;

        let mut coeffs = Vec::with_capacity(len);
        let mut t = q;
        coeffs.push(dbl_line_without_p(&mut t));
        for (i, &digit) in si.iter().enumerate().skip(1) {
            if i > 1 {
                coeffs.push(dbl_line_without_p(&mut t));
            }
            if digit != 0 {
                let addend = if digit > 0 { &q } else { &neg_q };
                coeffs.push(add_line_without_p(&mut t, addend));
            }
        }

        if self.params.is_negative() {
            t = -t;
        }
        if let Some(extra) = self.family.miller_loop_extra_steps(&mut t, &q) {
            coeffs.extend(extra);
        }
        debug_assert_eq!(coeffs.len(), len);
        coeffs
    }

    /// Miller loop for `p` using coefficients from
    /// [`Pairing::precompute_g2`]. Agrees with [`Pairing::miller_loop`].
    pub fn precomputed_miller_loop<'a>(&'a self, p: &G1<'a>, coeffs: &[Fp6<'a>]) -> Result<Fp12<'a>> {
        self.check_coeffs(coeffs)?;
        let one = Fp12::one(&self.cfg);
        let Some(p) = p.to_affine() else {
            return Ok(one);
        };
        if bool::from(coeffs[0].is_zero()) {
            return Ok(one);
        }

        let mut lines = Lines::new(coeffs, p);
        let si = &self.params.si;

        let d = lines.next_dbl();
        let mut f = if si[1] != 0 {
            let e = lines.next_add();
            self.mul_sparse2(&d, &e)
        } else {
            self.convert_line(&d)
        };

        for &digit in &si[2..] {
            f = self.mul_sparse(&f.square(), &lines.next_dbl());
            if digit != 0 {
                f = self.mul_sparse(&f, &lines.next_add());
            }
        }

        if self.params.is_negative() {
            f = f.conjugate();
        }
        if self.family.extra_line_count() == 2 {
            let d = lines.next_add();
            let e = lines.next_add();
            f *= self.mul_sparse2(&d, &e);
        }
        Ok(f)
    }

    /// Product of two precomputed Miller loops sharing the squarings.
    pub fn precomputed_miller_loop2<'a>(
        &'a self,
        p1: &G1<'a>,
        coeffs1: &[Fp6<'a>],
        p2: &G1<'a>,
        coeffs2: &[Fp6<'a>],
    ) -> Result<Fp12<'a>> {
        self.check_coeffs(coeffs1)?;
        self.check_coeffs(coeffs2)?;
        Ok(self.dual_loop(p1, coeffs1, p2, coeffs2))
    }

    fn check_coeffs(&self, coeffs: &[Fp6<'_>]) -> Result<()> {
        let expected = self.params.precomputed_len;
        if coeffs.len() != expected {
            return Err(Error::CoefficientCount {
                expected,
                actual: coeffs.len(),
            });
        }
        Ok(())
    }

    /// Interleaved loop over two coefficient sets of checked length.
    fn dual_loop<'a>(
        &'a self,
        p1: &G1<'a>,
        coeffs1: &[Fp6<'a>],
        p2: &G1<'a>,
        coeffs2: &[Fp6<'a>],
    ) -> Fp12<'a> {
        let one = Fp12::one(&self.cfg);
        let single = |p: &G1<'a>, c: &[Fp6<'a>]| self.precomputed_miller_loop(p, c).unwrap_or(one);

        let (a1, a2) = match (p1.to_affine(), p2.to_affine()) {
            (Some(a1), Some(a2)) => (a1, a2),
            (None, _) => return single(p2, coeffs2),
            (_, None) => return single(p1, coeffs1),
        };
        if bool::from(coeffs1[0].is_zero()) {
            return single(p2, coeffs2);
        }
        if bool::from(coeffs2[0].is_zero()) {
            return single(p1, coeffs1);
        }

        let mut l1 = Lines::new(coeffs1, a1);
        let mut l2 = Lines::new(coeffs2, a2);
        let si = &self.params.si;

        let (d1, d2) = (l1.next_dbl(), l2.next_dbl());
        let mut f = if si[1] != 0 {
            let (e1, e2) = (l1.next_add(), l2.next_add());
            self.mul_sparse2(&d1, &e1) * self.mul_sparse2(&d2, &e2)
        } else {
            self.mul_sparse2(&d1, &d2)
        };

        for &digit in &si[2..] {
            f = f.square();
            f = self.mul_sparse(&f, &l1.next_dbl());
            f = self.mul_sparse(&f, &l2.next_dbl());
            if digit != 0 {
                f = self.mul_sparse(&f, &l1.next_add());
                f = self.mul_sparse(&f, &l2.next_add());
            }
        }

        if self.params.is_negative() {
            f = f.conjugate();
        }
        if self.family.extra_line_count() == 2 {
            for lines in [&mut l1, &mut l2] {
                let d = lines.next_add();
                let e = lines.next_add();
                f *= self.mul_sparse2(&d, &e);
            }
        }
        f
    }
}

/// Cursor over precomputed coefficients, evaluating each at `P` as it is
/// consumed.
struct Lines<'c, 'a> {
    coeffs: core::slice::Iter<'c, Fp6<'a>>,
    p: Affine<'a>,
    adj_p: Affine<'a>,
}

impl<'c, 'a> Lines<'c, 'a> {
    fn new(coeffs: &'c [Fp6<'a>], p: Affine<'a>) -> Self {
        Self {
            coeffs: coeffs.iter(),
            adj_p: adjusted(&p),
            p,
        }
    }

    fn next_line(&mut self) -> Fp6<'a> {
        // lengths are checked against the loop shape before iterating
        match self.coeffs.next() {
            Some(l) => *l,
            None => Fp6::zero(self.p.0.config()),
        }
    }

    fn next_dbl(&mut self) -> Fp6<'a> {
        let l = self.next_line();
        update_line(&l, &self.adj_p)
    }

    fn next_add(&mut self) -> Fp6<'a> {
        let l = self.next_line();
        update_line(&l, &self.p)
    }
}
