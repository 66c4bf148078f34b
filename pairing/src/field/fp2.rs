//! Quadratic extension `Fp2 = Fp[i] / (i^2 + 1)`.

use super::backend::Limbs;
use super::{Fp, Fp2Dbl};
use crate::{CurveConfig, TwistBType};
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use vint::Vint;

/// Element `c0 + c1 * i` of the quadratic extension.
#[derive(Clone, Copy, Debug)]
pub struct Fp2<'a> {
    /// Real part.
    pub c0: Fp<'a>,
    /// Imaginary part.
    pub c1: Fp<'a>,
}

impl<'a> Fp2<'a> {
    /// Builds `c0 + c1 * i`.
    pub fn new(c0: Fp<'a>, c1: Fp<'a>) -> Self {
        Self { c0, c1 }
    }

    /// Returns zero.
    pub fn zero(cfg: &'a CurveConfig) -> Self {
        Self::new(Fp::zero(cfg), Fp::zero(cfg))
    }

    /// Returns one.
    pub fn one(cfg: &'a CurveConfig) -> Self {
        Self::new(Fp::one(cfg), Fp::zero(cfg))
    }

    /// Embeds a base field element.
    pub fn from_fp(c0: Fp<'a>) -> Self {
        Self::new(c0, Fp::zero(c0.cfg))
    }

    /// The non-residue `ξ = xi_a + i` defining the sextic extension.
    pub fn xi(cfg: &'a CurveConfig) -> Self {
        Self::new(Fp::from_u64(cfg, cfg.xi_a), Fp::one(cfg))
    }

    pub(crate) fn from_raw(cfg: &'a CurveConfig, raw: &[Limbs; 2]) -> Self {
        Self::new(Fp::from_raw(cfg, raw[0]), Fp::from_raw(cfg, raw[1]))
    }

    pub(crate) fn to_raw(self) -> [Limbs; 2] {
        [self.c0.v, self.c1.v]
    }

    /// Uniformly random element.
    pub fn random<R: RngCore + ?Sized>(cfg: &'a CurveConfig, rng: &mut R) -> Self {
        Self::new(Fp::random(cfg, rng), Fp::random(cfg, rng))
    }

    /// Configuration this element belongs to.
    pub fn config(&self) -> &'a CurveConfig {
        self.c0.cfg
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// Returns `self / 2`.
    pub fn half(&self) -> Self {
        Self::new(self.c0.half(), self.c1.half())
    }

    /// Returns `(a + b)(a - b) + 2ab * i`.
    pub fn square(&self) -> Self {
        let t = self.c0 * self.c1;
        Self::new((self.c0 + self.c1) * (self.c0 - self.c1), t.double())
    }

    /// Complex conjugate, which is also the `p`-power Frobenius map.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Multiplies both parts by a base field element.
    pub fn mul_fp(&self, k: &Fp<'a>) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }

    /// Multiplies by `ξ = xi_a + i`.
    pub fn mul_xi(&self) -> Self {
        let xi_a = self.c0.cfg.xi_a;
        Self::new(
            self.c0.mul_u64(xi_a) - self.c1,
            self.c0 + self.c1.mul_u64(xi_a),
        )
    }

    /// Multiplies by the twist coefficient, with shortcuts for `1 - i` and
    /// `1 - 2i`.
    pub(crate) fn mul_twist_b(&self) -> Self {
        let cfg = self.config();
        let (a, b) = (self.c0, self.c1);
        match cfg.twist_b_type {
            TwistBType::OneMinusI => Self::new(a + b, b - a),
            TwistBType::OneMinusTwoI => {
                let (a2, b2) = (a.double(), b.double());
                Self::new(a + b2, b - a2)
            }
            TwistBType::Generic => self * cfg.twist_b(),
        }
    }

    /// `c0^2 + c1^2`, the norm down to `Fp`.
    pub fn norm(&self) -> Fp<'a> {
        self.c0.square() + self.c1.square()
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let t = self.norm().invert();
        let inv = t.unwrap_or(Fp::zero(self.config()));
        CtOption::new(Self::new(self.c0 * inv, -(self.c1 * inv)), t.is_some())
    }

    /// Returns `self^e` for `e >= 0`. Variable time in `e`.
    pub fn pow_vartime(&self, e: &Vint) -> Self {
        let mut acc = Self::one(self.config());
        for i in (0..e.bit_len()).rev() {
            acc = acc.square();
            if e.test_bit(i) {
                acc *= self;
            }
        }
        acc
    }

    /// Square root by the norm method, `None` for non-squares.
    pub fn sqrt(&self) -> CtOption<Self> {
        let cfg = self.config();
        let candidate = if bool::from(self.c1.is_zero()) {
            // real input: the root is either real or purely imaginary
            let real: Option<Fp<'a>> = self.c0.sqrt().into();
            let imag: Option<Fp<'a>> = (-self.c0).sqrt().into();
            match (real, imag) {
                (Some(r), _) => Self::from_fp(r),
                (None, Some(r)) => Self::new(Fp::zero(cfg), r),
                (None, None) => Self::zero(cfg),
            }
        } else {
            let n: Option<Fp<'a>> = self.norm().sqrt().into();
            let n = n.unwrap_or(Fp::zero(cfg));
            let first: Option<Fp<'a>> = (self.c0 + n).half().sqrt().into();
            let x0 = match first {
                Some(x0) => Some(x0),
                None => (self.c0 - n).half().sqrt().into(),
            };
            match x0 {
                Some(x0) => {
                    let x1: Option<Fp<'a>> = x0.double().invert().into();
                    Self::new(x0, self.c1 * x1.unwrap_or(Fp::zero(cfg)))
                }
                None => Self::zero(cfg),
            }
        };
        CtOption::new(candidate, candidate.square().ct_eq(self))
    }
}

impl<'a> Add<&Fp2<'a>> for &Fp2<'a> {
    type Output = Fp2<'a>;

    #[inline]
    fn add(self, rhs: &Fp2<'a>) -> Fp2<'a> {
        Fp2::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<'a> Sub<&Fp2<'a>> for &Fp2<'a> {
    type Output = Fp2<'a>;

    #[inline]
    fn sub(self, rhs: &Fp2<'a>) -> Fp2<'a> {
        Fp2::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl<'a> Mul<&Fp2<'a>> for &Fp2<'a> {
    type Output = Fp2<'a>;

    #[inline]
    fn mul(self, rhs: &Fp2<'a>) -> Fp2<'a> {
        Fp2Dbl::mul(self, rhs).reduce()
    }
}

impl<'a> Neg for &Fp2<'a> {
    type Output = Fp2<'a>;

    #[inline]
    fn neg(self) -> Fp2<'a> {
        Fp2::new(-self.c0, -self.c1)
    }
}

impl ConstantTimeEq for Fp2<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp::conditional_select(&a.c0, &b.c0, choice),
            Fp::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl_ref_ops!(Fp2);
