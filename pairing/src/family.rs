//! Per-family polynomials and pairing steps.

use crate::curve_param::Family;
use crate::field::{Fp6, Fp12};
use crate::group::G2;
use crate::pairing::{final_exp, line};
use crate::{Error, Pairing, Result};
use alloc::{vec, vec::Vec};
use core::fmt;
use vint::Vint;

/// Family-specific parts of parameter derivation and of the pairing.
pub trait CurveFamily: fmt::Debug + Sync {
    /// Which family this is.
    fn family(&self) -> Family;

    /// `(p, r)` as polynomials in the seed.
    fn derive_modulus_and_order(&self, z: &Vint) -> Result<(Vint, Vint)>;

    /// Non-negative scalar whose digits drive the Miller loop.
    fn loop_scalar(&self, z: &Vint) -> Vint;

    /// Base-`p` digits of the hard part exponent.
    fn hard_part_exponents(&self, z: &Vint) -> Vec<Vint>;

    /// Cofactor of G1 in `E(Fp)`.
    fn g1_cofactor(&self, z: &Vint) -> Vint;

    /// Cofactor of G2 in `E'(Fp2)`.
    fn g2_cofactor(&self, z: &Vint, p: &Vint, r: &Vint) -> Vint;

    /// Number of line evaluations appended after the main Miller loop.
    fn extra_line_count(&self) -> usize;

    /// Lines appended after the main loop, given the running point `t` and
    /// the affine G2 input `q`. `None` when the family needs none.
    fn miller_loop_extra_steps<'a>(&self, t: &mut G2<'a>, q: &G2<'a>) -> Option<[Fp6<'a>; 2]>;

    /// Hard part of the final exponentiation on a cyclotomic element.
    fn final_exp_hard_part<'a>(&self, e: &'a Pairing, x: &Fp12<'a>) -> Fp12<'a>;
}

impl Family {
    /// Strategy object implementing this family.
    pub fn strategy(self) -> &'static dyn CurveFamily {
        match self {
            Family::Bn => &BnFamily,
            Family::Bls12 => &Bls12Family,
        }
    }
}

/// Barreto-Naehrig curves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BnFamily;

impl CurveFamily for BnFamily {
    fn family(&self) -> Family {
        Family::Bn
    }

    fn derive_modulus_and_order(&self, z: &Vint) -> Result<(Vint, Vint)> {
        let p = horner(z, &[36, 36, 24, 6, 1]);
        let r = horner(z, &[36, 36, 18, 6, 1]);
        if (&p % 6) != 1 {
            return Err(Error::InvalidParameter("BN modulus must be 1 mod 6"));
        }
        Ok((p, r))
    }

    fn loop_scalar(&self, z: &Vint) -> Vint {
        (z * 6 + 2).abs()
    }

    fn hard_part_exponents(&self, z: &Vint) -> Vec<Vint> {
        vec![
            horner(z, &[-36, -30, -18, -2]),
            horner(z, &[-36, -18, -12, 1]),
            horner(z, &[6, 0, 1]),
        ]
    }

    fn g1_cofactor(&self, _z: &Vint) -> Vint {
        Vint::one()
    }

    fn g2_cofactor(&self, _z: &Vint, p: &Vint, r: &Vint) -> Vint {
        p * 2 - r
    }

    fn extra_line_count(&self) -> usize {
        2
    }

    fn miller_loop_extra_steps<'a>(&self, t: &mut G2<'a>, q: &G2<'a>) -> Option<[Fp6<'a>; 2]> {
        let q1 = q.frobenius();
        let q2 = -q1.frobenius();
        let d = line::add_line_without_p(t, &q1);
        let e = line::add_line_without_p(t, &q2);
        Some([d, e])
    }

    fn final_exp_hard_part<'a>(&self, e: &'a Pairing, x: &Fp12<'a>) -> Fp12<'a> {
        final_exp::hard_part_bn(e, x)
    }
}

/// Barreto-Lynn-Scott curves of embedding degree 12.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bls12Family;

impl CurveFamily for Bls12Family {
    fn family(&self) -> Family {
        Family::Bls12
    }

    fn derive_modulus_and_order(&self, z: &Vint) -> Result<(Vint, Vint)> {
        let r = horner(z, &[1, 0, -1, 0, 1]);
        let zm1 = z - 1;
        let (p, rem) = (&zm1 * &zm1 * &r).quot_rem(&Vint::from(3u64))?;
        if !rem.is_zero() {
            return Err(Error::InvalidParameter("(z - 1)^2 r must be divisible by 3"));
        }
        Ok((p + z, r))
    }

    fn loop_scalar(&self, z: &Vint) -> Vint {
        z.abs()
    }

    fn hard_part_exponents(&self, z: &Vint) -> Vec<Vint> {
        vec![
            horner(z, &[1, -2, 0, 2, -1, 3]),
            horner(z, &[1, -2, 0, 2, -1]),
            horner(z, &[1, -2, 1, 0]),
            horner(z, &[1, -2, 1]),
        ]
    }

    fn g1_cofactor(&self, z: &Vint) -> Vint {
        let zm1 = z - 1;
        (&zm1 * &zm1) / 3
    }

    fn g2_cofactor(&self, z: &Vint, _p: &Vint, _r: &Vint) -> Vint {
        horner(z, &[1, -4, 5, 0, -4, 6, -4, -4, 13]) / 9
    }

    fn extra_line_count(&self) -> usize {
        0
    }

    fn miller_loop_extra_steps<'a>(&self, _t: &mut G2<'a>, _q: &G2<'a>) -> Option<[Fp6<'a>; 2]> {
        None
    }

    fn final_exp_hard_part<'a>(&self, e: &'a Pairing, x: &Fp12<'a>) -> Fp12<'a> {
        final_exp::hard_part_bls12(e, x)
    }
}

/// Evaluates a polynomial with coefficients listed from the highest degree.
fn horner(z: &Vint, coeffs: &[i64]) -> Vint {
    coeffs
        .iter()
        .fold(Vint::zero(), |acc, &c| acc * z + c)
}
