//! Quadratic extension `Fp12 = Fp6[w] / (w^2 - v)`, the pairing target group.

use super::{Fp2, Fp6};
use crate::CurveConfig;
use core::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use vint::Vint;

/// Power of `w` carried by each flat coefficient
/// `[c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2]`.
const W_POWERS: [usize; 6] = [0, 2, 4, 1, 3, 5];

/// Element `c0 + c1 * w` of the degree 12 extension.
#[derive(Clone, Copy, Debug)]
pub struct Fp12<'a> {
    /// Constant coefficient.
    pub c0: Fp6<'a>,
    /// Coefficient of `w`.
    pub c1: Fp6<'a>,
}

impl<'a> Fp12<'a> {
    /// Builds `c0 + c1 * w`.
    pub fn new(c0: Fp6<'a>, c1: Fp6<'a>) -> Self {
        Self { c0, c1 }
    }

    /// Returns zero.
    pub fn zero(cfg: &'a CurveConfig) -> Self {
        Self::new(Fp6::zero(cfg), Fp6::zero(cfg))
    }

    /// Returns one.
    pub fn one(cfg: &'a CurveConfig) -> Self {
        Self::new(Fp6::one(cfg), Fp6::zero(cfg))
    }

    /// Configuration this element belongs to.
    pub fn config(&self) -> &'a CurveConfig {
        self.c0.config()
    }

    /// Coefficients in storage order
    /// `[c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2]`.
    pub fn to_flat(&self) -> [Fp2<'a>; 6] {
        [
            self.c0.c0, self.c0.c1, self.c0.c2, self.c1.c0, self.c1.c1, self.c1.c2,
        ]
    }

    /// Inverse of [`Fp12::to_flat`].
    pub fn from_flat(x: [Fp2<'a>; 6]) -> Self {
        Self::new(Fp6::new(x[0], x[1], x[2]), Fp6::new(x[3], x[4], x[5]))
    }

    /// Determine if this element is one.
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::one(self.config()))
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Negates the `w` coefficient. On the cyclotomic subgroup this is the
    /// inverse.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Complex squaring: `(a + bw)^2 = a^2 + b^2 v + 2ab w`.
    pub fn square(&self) -> Self {
        let (a, b) = (&self.c0, &self.c1);
        let ab = a * b;
        let c0 = (a + b) * (a + b.mul_v()) - ab - ab.mul_v();
        Self::new(c0, ab + ab)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (a, b) = (&self.c0, &self.c1);
        let t = (a.square() - b.square().mul_v()).invert();
        let k = t.unwrap_or(Fp6::zero(self.config()));
        CtOption::new(Self::new(a * k, -(b * k)), t.is_some())
    }

    /// The `p`-power Frobenius map.
    ///
    /// Conjugates every coefficient and scales the coefficient of `w^k` by
    /// `ξ^(k (p - 1) / 6)`.
    pub fn frobenius(&self) -> Self {
        let cfg = self.config();
        let mut x = self.to_flat();
        for (c, &k) in x.iter_mut().zip(W_POWERS.iter()) {
            *c = c.conjugate();
            if k != 0 {
                *c *= cfg.frobenius_coeff(k);
            }
        }
        Self::from_flat(x)
    }

    /// The `p^2`-power Frobenius map.
    pub fn frobenius2(&self) -> Self {
        self.frobenius().frobenius()
    }

    /// The `p^3`-power Frobenius map.
    pub fn frobenius3(&self) -> Self {
        self.frobenius2().frobenius()
    }

    /// Squaring valid on the cyclotomic subgroup (Granger-Scott), working on
    /// three `Fp4` squarings.
    pub fn cyclotomic_square(&self) -> Self {
        let [x0, x4, x3, x2, x1, x5] = self.to_flat();

        let (t0, t1) = sqr_fp4(&x0, &x1);
        let y0 = (t0 - x0).double() + t0;
        let y1 = (t1 + x1).double() + t1;

        let (t0, t1) = sqr_fp4(&x2, &x3);
        let (t2, t3) = sqr_fp4(&x4, &x5);
        let y4 = (t0 - x4).double() + t0;
        let y5 = (t1 + x5).double() + t1;

        let t0 = t3.mul_xi();
        let y2 = (t0 + x2).double() + t0;
        let y3 = (t2 - x3).double() + t2;

        Self::from_flat([y0, y4, y3, y2, y1, y5])
    }

    /// Returns `self^e` for `e >= 0` by plain square-and-multiply.
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
}

/// `(x0 + x1 t)^2` in `Fp4 = Fp2[t] / (t^2 - ξ)`.
fn sqr_fp4<'a>(x0: &Fp2<'a>, x1: &Fp2<'a>) -> (Fp2<'a>, Fp2<'a>) {
    let t0 = x0.square();
    let t1 = x1.square();
    let z0 = t1.mul_xi() + t0;
    let z1 = (x0 + x1).square() - t0 - t1;
    (z0, z1)
}

impl<'a> Add<&Fp12<'a>> for &Fp12<'a> {
    type Output = Fp12<'a>;

    #[inline]
    fn add(self, rhs: &Fp12<'a>) -> Fp12<'a> {
        Fp12::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<'a> Sub<&Fp12<'a>> for &Fp12<'a> {
    type Output = Fp12<'a>;

    #[inline]
    fn sub(self, rhs: &Fp12<'a>) -> Fp12<'a> {
        Fp12::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl<'a> Mul<&Fp12<'a>> for &Fp12<'a> {
    type Output = Fp12<'a>;

    /// Karatsuba: `ac + bd v` and `(a + b)(c + d) - ac - bd`.
    fn mul(self, rhs: &Fp12<'a>) -> Fp12<'a> {
        let (a, b) = (&self.c0, &self.c1);
        let (c, d) = (&rhs.c0, &rhs.c1);
        let ac = a * c;
        let bd = b * d;
        let t = (a + b) * (c + d);
        Fp12::new(ac + bd.mul_v(), t - ac - bd)
    }
}

impl<'a> Neg for &Fp12<'a> {
    type Output = Fp12<'a>;

    #[inline]
    fn neg(self) -> Fp12<'a> {
        Fp12::new(-self.c0, -self.c1)
    }
}

impl ConstantTimeEq for Fp12<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp6::conditional_select(&a.c0, &b.c0, choice),
            Fp6::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl_ref_ops!(Fp12);
