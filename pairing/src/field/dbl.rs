//! Unreduced double-width products.
//!
//! Values live in `[0, p * R)` and are reduced to a field element with a single
//! Montgomery reduction, so several products can be summed before paying for
//! a reduction.

use super::backend::Wide;
use super::{Fp, Fp2};
use crate::CurveConfig;
use core::ops::{Add, Sub};

/// Double-width `Fp` value.
#[derive(Clone, Copy)]
pub struct FpDbl<'a> {
    v: Wide,
    cfg: &'a CurveConfig,
}

impl<'a> FpDbl<'a> {
    /// Full product `x * y` without reduction.
    #[inline]
    pub fn mul(x: &Fp<'a>, y: &Fp<'a>) -> Self {
        Self {
            v: x.field().mul_pre(&x.v, &y.v),
            cfg: x.cfg,
        }
    }

    /// Montgomery reduction back to a field element.
    #[inline]
    pub fn reduce(&self) -> Fp<'a> {
        Fp::from_raw(self.cfg, self.cfg.fp.reduce(&self.v))
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        self + self
    }

    /// Multiplies by a small constant with doublings and additions.
    pub fn mul_u64(&self, k: u64) -> Self {
        let mut acc = Self {
            v: [0; 2 * super::MAX_LIMBS],
            cfg: self.cfg,
        };
        for i in (0..u64::BITS - k.leading_zeros()).rev() {
            acc = acc.double();
            if (k >> i) & 1 == 1 {
                acc = &acc + self;
            }
        }
        acc
    }
}

impl<'a> Add<&FpDbl<'a>> for &FpDbl<'a> {
    type Output = FpDbl<'a>;

    #[inline]
    fn add(self, rhs: &FpDbl<'a>) -> FpDbl<'a> {
        FpDbl {
            v: self.cfg.fp.dbl_add(&self.v, &rhs.v),
            cfg: self.cfg,
        }
    }
}

impl<'a> Sub<&FpDbl<'a>> for &FpDbl<'a> {
    type Output = FpDbl<'a>;

    #[inline]
    fn sub(self, rhs: &FpDbl<'a>) -> FpDbl<'a> {
        FpDbl {
            v: self.cfg.fp.dbl_sub(&self.v, &rhs.v),
            cfg: self.cfg,
        }
    }
}

/// Double-width `Fp2` value.
#[derive(Clone, Copy)]
pub struct Fp2Dbl<'a> {
    /// Real part.
    pub c0: FpDbl<'a>,
    /// Imaginary part.
    pub c1: FpDbl<'a>,
}

impl<'a> Fp2Dbl<'a> {
    /// Karatsuba product `x * y` without reduction.
    ///
    /// Operand sums are reduced first so every partial product stays below
    /// `p^2`, whatever headroom the modulus leaves in its top limb.
    pub fn mul(x: &Fp2<'a>, y: &Fp2<'a>) -> Self {
        let d0 = FpDbl::mul(&x.c0, &y.c0);
        let d1 = FpDbl::mul(&x.c1, &y.c1);
        let s = FpDbl::mul(&(x.c0 + x.c1), &(y.c0 + y.c1));
        Self {
            c0: &d0 - &d1,
            c1: &(&s - &d0) - &d1,
        }
    }

    /// Reduces both parts.
    #[inline]
    pub fn reduce(&self) -> Fp2<'a> {
        Fp2::new(self.c0.reduce(), self.c1.reduce())
    }

    /// Multiplies by `ξ = xi_a + i`.
    pub fn mul_xi(&self) -> Self {
        let xi_a = self.c0.cfg.xi_a;
        Self {
            c0: &self.c0.mul_u64(xi_a) - &self.c1,
            c1: &self.c0 + &self.c1.mul_u64(xi_a),
        }
    }
}

impl<'a> Add<&Fp2Dbl<'a>> for &Fp2Dbl<'a> {
    type Output = Fp2Dbl<'a>;

    #[inline]
    fn add(self, rhs: &Fp2Dbl<'a>) -> Fp2Dbl<'a> {
        Fp2Dbl {
            c0: &self.c0 + &rhs.c0,
            c1: &self.c1 + &rhs.c1,
        }
    }
}

impl<'a> Sub<&Fp2Dbl<'a>> for &Fp2Dbl<'a> {
    type Output = Fp2Dbl<'a>;

    #[inline]
    fn sub(self, rhs: &Fp2Dbl<'a>) -> Fp2Dbl<'a> {
        Fp2Dbl {
            c0: &self.c0 - &rhs.c0,
            c1: &self.c1 - &rhs.c1,
        }
    }
}
