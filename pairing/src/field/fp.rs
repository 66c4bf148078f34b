//! Base and scalar field elements.

use super::backend::Limbs;
use super::mont::MontField;
use crate::CurveConfig;
use rand_core::RngCore;
use subtle::{Choice, CtOption};
use vint::Vint;

/// Element of the base field `Fp` in Montgomery form.
///
/// Borrows the curve configuration it was created from; elements of
/// different configurations must not be mixed.
#[derive(Clone, Copy)]
pub struct Fp<'a> {
    pub(crate) v: Limbs,
    pub(crate) cfg: &'a CurveConfig,
}

impl<'a> Fp<'a> {
    pub(crate) fn from_raw(cfg: &'a CurveConfig, v: Limbs) -> Self {
        Self { v, cfg }
    }

    #[inline]
    pub(crate) fn field(&self) -> &'a MontField {
        &self.cfg.fp
    }

    /// Returns zero.
    pub fn zero(cfg: &'a CurveConfig) -> Self {
        Self::from_raw(cfg, cfg.fp.zero())
    }

    /// Returns one.
    pub fn one(cfg: &'a CurveConfig) -> Self {
        Self::from_raw(cfg, cfg.fp.one())
    }

    /// Small integer constant.
    pub fn from_u64(cfg: &'a CurveConfig, v: u64) -> Self {
        Self::from_raw(cfg, cfg.fp.from_u64(v))
    }

    /// Reduces an integer of any sign modulo `p`.
    pub fn from_vint(cfg: &'a CurveConfig, v: &Vint) -> Self {
        Self::from_raw(cfg, cfg.fp.to_mont(v))
    }

    /// Canonical integer in `[0, p)`.
    pub fn to_vint(&self) -> Vint {
        self.field().from_mont(&self.v)
    }

    /// Uniformly random element.
    pub fn random<R: RngCore + ?Sized>(cfg: &'a CurveConfig, rng: &mut R) -> Self {
        Self::from_raw(cfg, cfg.fp.random(rng))
    }

    /// Configuration this element belongs to.
    pub fn config(&self) -> &'a CurveConfig {
        self.cfg
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.field().is_zero(&self.v)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self::from_raw(self.cfg, self.field().double(&self.v))
    }

    /// Returns `self / 2`.
    pub fn half(&self) -> Self {
        Self::from_raw(self.cfg, self.field().half(&self.v))
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self::from_raw(self.cfg, self.field().square(&self.v))
    }

    /// Multiplies by a small constant with doublings and additions.
    pub fn mul_u64(&self, k: u64) -> Self {
        let mut acc = Self::zero(self.cfg);
        for i in (0..u64::BITS - k.leading_zeros()).rev() {
            acc = acc.double();
            if (k >> i) & 1 == 1 {
                acc += self;
            }
        }
        acc
    }

    /// Returns `self^e` for `e >= 0`. Variable time in `e`.
    pub fn pow_vartime(&self, e: &Vint) -> Self {
        Self::from_raw(self.cfg, self.field().pow(&self.v, e))
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let cfg = self.cfg;
        self.field().invert(&self.v).map(|v| Self::from_raw(cfg, v))
    }

    /// Square root, `None` for non-residues.
    pub fn sqrt(&self) -> CtOption<Self> {
        let cfg = self.cfg;
        self.field().sqrt(&self.v).map(|v| Self::from_raw(cfg, v))
    }
}

impl_mont_ops!(Fp);

/// Element of the scalar field `Fr`, the integers modulo the group order.
#[derive(Clone, Copy)]
pub struct Fr<'a> {
    pub(crate) v: Limbs,
    pub(crate) field: &'a MontField,
}

impl<'a> Fr<'a> {
    #[inline]
    pub(crate) fn field(&self) -> &'a MontField {
        self.field
    }

    /// Returns zero.
    pub fn zero(field: &'a MontField) -> Self {
        Self {
            v: field.zero(),
            field,
        }
    }

    /// Returns one.
    pub fn one(field: &'a MontField) -> Self {
        Self {
            v: field.one(),
            field,
        }
    }

    /// Reduces an integer of any sign modulo the group order.
    pub fn from_vint(field: &'a MontField, v: &Vint) -> Self {
        Self {
            v: field.to_mont(v),
            field,
        }
    }

    /// Small integer constant.
    pub fn from_u64(field: &'a MontField, v: u64) -> Self {
        Self::from_vint(field, &Vint::from(v))
    }

    /// Canonical integer in `[0, r)`.
    pub fn to_vint(&self) -> Vint {
        self.field.from_mont(&self.v)
    }

    /// Uniformly random scalar.
    pub fn random<R: RngCore + ?Sized>(field: &'a MontField, rng: &mut R) -> Self {
        Self {
            v: field.random(rng),
            field,
        }
    }

    /// Determine if this scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.field.is_zero(&self.v)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self {
            v: self.field.square(&self.v),
            ..*self
        }
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let field = self.field;
        self.field.invert(&self.v).map(|v| Self { v, field })
    }
}

impl_mont_ops!(Fr);
