//! Points on `E: y^2 = x^3 + b` over `Fp` and on its twist over `Fp2`.
//!
//! Homogeneous projective coordinates `(x : y : z)` with `z = 0` for the
//! identity. Addition and doubling use the complete formulas for `a = 0`.

use crate::field::{Fp, Fp2, Fr};
use crate::{CurveConfig, Error, Result};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use vint::Vint;

/// Coordinate field of a curve group.
pub trait EcField<'a>:
    Copy
    + ConstantTimeEq
    + ConditionallySelectable
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero(cfg: &'a CurveConfig) -> Self;

    /// Multiplicative identity.
    fn one(cfg: &'a CurveConfig) -> Self;

    /// Constant term of the curve equation over this field.
    fn curve_b(cfg: &'a CurveConfig) -> Self;

    /// Configuration the element belongs to.
    fn config(&self) -> &'a CurveConfig;

    /// Determine if the element is zero.
    fn is_zero(&self) -> Choice;

    /// Returns `self * self`.
    fn square(&self) -> Self;

    /// Returns `self + self`.
    fn double(&self) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn invert(&self) -> CtOption<Self>;
}

impl<'a> EcField<'a> for Fp<'a> {
    fn zero(cfg: &'a CurveConfig) -> Self {
        Fp::zero(cfg)
    }

    fn one(cfg: &'a CurveConfig) -> Self {
        Fp::one(cfg)
    }

    fn curve_b(cfg: &'a CurveConfig) -> Self {
        cfg.b()
    }

    fn config(&self) -> &'a CurveConfig {
        Fp::config(self)
    }

    fn is_zero(&self) -> Choice {
        Fp::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn double(&self) -> Self {
        Fp::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp::invert(self)
    }
}

impl<'a> EcField<'a> for Fp2<'a> {
    fn zero(cfg: &'a CurveConfig) -> Self {
        Fp2::zero(cfg)
    }

    fn one(cfg: &'a CurveConfig) -> Self {
        Fp2::one(cfg)
    }

    fn curve_b(cfg: &'a CurveConfig) -> Self {
        cfg.twist_b()
    }

    fn config(&self) -> &'a CurveConfig {
        Fp2::config(self)
    }

    fn is_zero(&self) -> Choice {
        Fp2::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp2::invert(self)
    }
}

/// Point in homogeneous projective coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Ec<F> {
    /// Projective `x`.
    pub x: F,
    /// Projective `y`.
    pub y: F,
    /// Projective `z`; zero for the identity.
    pub z: F,
}

/// Point on `E(Fp)`.
pub type G1<'a> = Ec<Fp<'a>>;

/// Point on the twist `E'(Fp2)`.
pub type G2<'a> = Ec<Fp2<'a>>;

impl<'a, F: EcField<'a>> Ec<F> {
    /// Returns the identity of the group.
    pub fn identity(cfg: &'a CurveConfig) -> Self {
        Self {
            x: F::zero(cfg),
            y: F::one(cfg),
            z: F::zero(cfg),
        }
    }

    /// Affine point `(x, y)`, checked against the curve equation.
    pub fn from_affine(x: F, y: F) -> Result<Self> {
        let point = Self {
            x,
            y,
            z: F::one(x.config()),
        };
        if bool::from(point.is_on_curve()) {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Projective point without any validation.
    pub fn new_unchecked(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Configuration the point belongs to.
    pub fn config(&self) -> &'a CurveConfig {
        self.x.config()
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Checks `y^2 z = x^3 + b z^3`.
    pub fn is_on_curve(&self) -> Choice {
        let b = F::curve_b(self.config());
        let z2 = self.z.square();
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x + b * z2 * self.z;
        lhs.ct_eq(&rhs)
    }

    /// Scales to `z = 1`; the identity becomes `(0 : 1 : 0)`.
    pub fn normalize(&self) -> Self {
        let cfg = self.config();
        match Option::<F>::from(self.z.invert()) {
            Some(zinv) => Self {
                x: self.x * zinv,
                y: self.y * zinv,
                z: F::one(cfg),
            },
            None => Self::identity(cfg),
        }
    }

    /// Affine coordinates, `None` for the identity.
    pub fn to_affine(&self) -> Option<(F, F)> {
        let zinv: Option<F> = self.z.invert().into();
        zinv.map(|zinv| (self.x * zinv, self.y * zinv))
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Implements complete addition for curves with `a = 0`
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 7). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(&self, rhs: &Self) -> Self {
        let b = F::curve_b(self.config());
        let b3 = b.double() + b;

        let t0 = self.x * rhs.x; // 1
        let t1 = self.y * rhs.y; // 2
        let t2 = self.z * rhs.z; // 3
        let t3 = self.x + self.y; // 4
        let t4 = rhs.x + rhs.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = t0 + t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = self.y + self.z; // 9
        let x3 = rhs.y + rhs.z; // 10
        let t4 = t4 * x3; // 11
        let x3 = t1 + t2; // 12
        let t4 = t4 - x3; // 13
        let x3 = self.x + self.z; // 14
        let y3 = rhs.x + rhs.z; // 15
        let x3 = x3 * y3; // 16
        let y3 = t0 + t2; // 17
        let y3 = x3 - y3; // 18
        let x3 = t0 + t0; // 19
        let t0 = x3 + t0; // 20
        let t2 = b3 * t2; // 21
        let z3 = t1 + t2; // 22
        let t1 = t1 - t2; // 23
        let y3 = b3 * y3; // 24
        let x3 = t4 * y3; // 25
        let t2 = t3 * t1; // 26
        let x3 = t2 - x3; // 27
        let y3 = y3 * t0; // 28
        let t1 = t1 * z3; // 29
        let y3 = t1 + y3; // 30
        let t0 = t0 * t3; // 31
        let z3 = z3 * t4; // 32
        let z3 = z3 + t0; // 33

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Implements the exception-free point doubling formula for `a = 0` from
    /// [Renes-Costello-Batina 2015] (Algorithm 9).
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn double(&self) -> Self {
        let b = F::curve_b(self.config());
        let b3 = b.double() + b;

        let t0 = self.y.square(); // 1
        let z3 = t0 + t0; // 2
        let z3 = z3 + z3; // 3
        let z3 = z3 + z3; // 4
        let t1 = self.y * self.z; // 5
        let t2 = self.z.square(); // 6
        let t2 = b3 * t2; // 7
        let x3 = t2 * z3; // 8
        let y3 = t0 + t2; // 9
        let z3 = t1 * z3; // 10
        let t1 = t2 + t2; // 11
        let t2 = t1 + t2; // 12
        let t0 = t0 - t2; // 13
        let y3 = t0 * y3; // 14
        let y3 = x3 + y3; // 15
        let t1 = self.x * self.y; // 16
        let x3 = t0 * t1; // 17
        let x3 = x3 + x3; // 18

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Scalar multiplication by an integer of any sign, scanning its
    /// non-adjacent form. Variable time.
    pub fn mul_vint(&self, k: &Vint) -> Self {
        let mut acc = Self::identity(self.config());
        let neg = self.neg();
        for d in k.naf() {
            acc = acc.double();
            match d {
                1 => acc = acc.add(self),
                -1 => acc = acc.add(&neg),
                _ => {}
            }
        }
        if k.is_negative() { acc.neg() } else { acc }
    }

    /// Scalar multiplication by an element of `Fr`.
    pub fn mul_fr(&self, k: &Fr<'_>) -> Self {
        self.mul_vint(&k.to_vint())
    }

    /// Checks that `r * self` is the identity.
    pub fn has_valid_order(&self) -> bool {
        let r = self.config().fr.modulus();
        self.mul_vint(r).is_identity().into()
    }
}

impl<'a> G2<'a> {
    /// Frobenius endomorphism `π(Q)` on the twist (untwist, `p`-power
    /// Frobenius, twist).
    pub fn frobenius(&self) -> Self {
        let (cx, cy) = self.config().twist_frobenius();
        Self {
            x: self.x.conjugate() * cx,
            y: self.y.conjugate() * cy,
            z: self.z.conjugate(),
        }
    }

    /// Returns `π(π(Q))`.
    pub fn frobenius2(&self) -> Self {
        self.frobenius().frobenius()
    }

    /// Returns `π(π(π(Q)))`.
    pub fn frobenius3(&self) -> Self {
        self.frobenius2().frobenius()
    }
}

impl<'a, F: EcField<'a>> ConstantTimeEq for Ec<F> {
    /// Cross-multiplied comparison, independent of the representatives.
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        x1.ct_eq(&x2) & y1.ct_eq(&y2)
    }
}

impl<'a, F: EcField<'a>> ConditionallySelectable for Ec<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
            z: F::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<'a, F: EcField<'a>> PartialEq for Ec<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<'a, F: EcField<'a>> Eq for Ec<F> {}

impl<'a, F: EcField<'a>> Add<&Ec<F>> for &Ec<F> {
    type Output = Ec<F>;

    fn add(self, other: &Ec<F>) -> Ec<F> {
        Ec::add(self, other)
    }
}

impl<'a, F: EcField<'a>> Add<Ec<F>> for Ec<F> {
    type Output = Ec<F>;

    fn add(self, other: Ec<F>) -> Ec<F> {
        Ec::add(&self, &other)
    }
}

impl<'a, F: EcField<'a>> Add<&Ec<F>> for Ec<F> {
    type Output = Ec<F>;

    fn add(self, other: &Ec<F>) -> Ec<F> {
        Ec::add(&self, other)
    }
}

impl<'a, F: EcField<'a>> AddAssign<&Ec<F>> for Ec<F> {
    fn add_assign(&mut self, rhs: &Ec<F>) {
        *self = Ec::add(self, rhs);
    }
}

impl<'a, F: EcField<'a>> AddAssign<Ec<F>> for Ec<F> {
    fn add_assign(&mut self, rhs: Ec<F>) {
        *self = Ec::add(self, &rhs);
    }
}

impl<'a, F: EcField<'a>> Sub<&Ec<F>> for &Ec<F> {
    type Output = Ec<F>;

    fn sub(self, other: &Ec<F>) -> Ec<F> {
        Ec::add(self, &Ec::neg(other))
    }
}

impl<'a, F: EcField<'a>> Sub<Ec<F>> for Ec<F> {
    type Output = Ec<F>;

    fn sub(self, other: Ec<F>) -> Ec<F> {
        Ec::add(&self, &Ec::neg(&other))
    }
}

impl<'a, F: EcField<'a>> SubAssign<&Ec<F>> for Ec<F> {
    fn sub_assign(&mut self, rhs: &Ec<F>) {
        *self = Ec::add(self, &Ec::neg(rhs));
    }
}

impl<'a, F: EcField<'a>> Neg for Ec<F> {
    type Output = Ec<F>;

    fn neg(self) -> Ec<F> {
        Ec::neg(&self)
    }
}

impl<'a, F: EcField<'a>> Neg for &Ec<F> {
    type Output = Ec<F>;

    fn neg(self) -> Ec<F> {
        Ec::neg(self)
    }
}

impl<'a, 'b, F: EcField<'a>> Mul<&Fr<'b>> for &Ec<F> {
    type Output = Ec<F>;

    fn mul(self, k: &Fr<'b>) -> Ec<F> {
        self.mul_fr(k)
    }
}

impl<'a, 'b, F: EcField<'a>> Mul<&Fr<'b>> for Ec<F> {
    type Output = Ec<F>;

    fn mul(self, k: &Fr<'b>) -> Ec<F> {
        self.mul_fr(k)
    }
}
