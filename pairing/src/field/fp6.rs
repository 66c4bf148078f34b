//! Cubic extension `Fp6 = Fp2[v] / (v^3 - ξ)`.

use super::{Fp2, Fp2Dbl};
use crate::CurveConfig;
use core::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Element `c0 + c1 * v + c2 * v^2` of the sextic extension.
#[derive(Clone, Copy, Debug)]
pub struct Fp6<'a> {
    /// Constant coefficient.
    pub c0: Fp2<'a>,
    /// Coefficient of `v`.
    pub c1: Fp2<'a>,
    /// Coefficient of `v^2`.
    pub c2: Fp2<'a>,
}

impl<'a> Fp6<'a> {
    /// Builds `c0 + c1 * v + c2 * v^2`.
    pub fn new(c0: Fp2<'a>, c1: Fp2<'a>, c2: Fp2<'a>) -> Self {
        Self { c0, c1, c2 }
    }

    /// Returns zero.
    pub fn zero(cfg: &'a CurveConfig) -> Self {
        let z = Fp2::zero(cfg);
        Self::new(z, z, z)
    }

    /// Returns one.
    pub fn one(cfg: &'a CurveConfig) -> Self {
        let z = Fp2::zero(cfg);
        Self::new(Fp2::one(cfg), z, z)
    }

    /// Configuration this element belongs to.
    pub fn config(&self) -> &'a CurveConfig {
        self.c0.config()
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        self * self
    }

    /// Multiplies by `v`: `(ξ c2, c0, c1)`.
    pub fn mul_v(&self) -> Self {
        Self::new(self.c2.mul_xi(), self.c0, self.c1)
    }

    /// Multiplies every coefficient by an `Fp2` element.
    pub fn mul_fp2(&self, k: &Fp2<'a>) -> Self {
        Self::new(self.c0 * k, self.c1 * k, self.c2 * k)
    }

    /// Multiplies by the sparse element `d + e * v`.
    pub fn mul_01(&self, d: &Fp2<'a>, e: &Fp2<'a>) -> Self {
        let (a, b, c) = (&self.c0, &self.c1, &self.c2);
        let ad = a * d;
        let be = b * e;
        let ce = c * e;
        let cd = c * d;
        let t = (a + b) * (d + e) - ad - be;
        Self::new(ad + ce.mul_xi(), t, be + cd)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (a, b, c) = (&self.c0, &self.c1, &self.c2);
        let t0 = a.square() - (b * c).mul_xi();
        let t1 = c.square().mul_xi() - a * b;
        let t2 = b.square() - a * c;
        let norm = a * t0 + (c * t1 + b * t2).mul_xi();

        let inv = norm.invert();
        let k = inv.unwrap_or(Fp2::zero(self.config()));
        CtOption::new(Self::new(t0 * k, t1 * k, t2 * k), inv.is_some())
    }
}

impl<'a> Add<&Fp6<'a>> for &Fp6<'a> {
    type Output = Fp6<'a>;

    #[inline]
    fn add(self, rhs: &Fp6<'a>) -> Fp6<'a> {
        Fp6::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<'a> Sub<&Fp6<'a>> for &Fp6<'a> {
    type Output = Fp6<'a>;

    #[inline]
    fn sub(self, rhs: &Fp6<'a>) -> Fp6<'a> {
        Fp6::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<'a> Mul<&Fp6<'a>> for &Fp6<'a> {
    type Output = Fp6<'a>;

    /// Karatsuba over `Fp2` with one reduction per output coefficient.
    fn mul(self, rhs: &Fp6<'a>) -> Fp6<'a> {
        let (a, b, c) = (&self.c0, &self.c1, &self.c2);
        let (d, e, f) = (&rhs.c0, &rhs.c1, &rhs.c2);

        let ad = Fp2Dbl::mul(a, d);
        let be = Fp2Dbl::mul(b, e);
        let cf = Fp2Dbl::mul(c, f);

        // bf + ce
        let t0 = &(&Fp2Dbl::mul(&(b + c), &(e + f)) - &be) - &cf;
        // ae + bd
        let t1 = &(&Fp2Dbl::mul(&(a + b), &(d + e)) - &ad) - &be;
        // af + cd
        let t2 = &(&Fp2Dbl::mul(&(a + c), &(d + f)) - &ad) - &cf;

        Fp6::new(
            (&ad + &t0.mul_xi()).reduce(),
            (&t1 + &cf.mul_xi()).reduce(),
            (&t2 + &be).reduce(),
        )
    }
}

impl<'a> Neg for &Fp6<'a> {
    type Output = Fp6<'a>;

    #[inline]
    fn neg(self) -> Fp6<'a> {
        Fp6::new(-self.c0, -self.c1, -self.c2)
    }
}

impl ConstantTimeEq for Fp6<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp2::conditional_select(&a.c0, &b.c0, choice),
            Fp2::conditional_select(&a.c1, &b.c1, choice),
            Fp2::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl_ref_ops!(Fp6);
