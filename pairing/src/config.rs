//! Field contexts and tower constants of a selected curve.

use crate::curve_param::Twist;
use crate::field::{Fp, Fp2, Limbs, MAX_LIMBS, Mode, MontField};
use crate::{Error, Result};
use vint::Vint;

/// Shape of the twist coefficient, for cheaper multiplication by it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TwistBType {
    /// `b' = 1 - i`.
    OneMinusI,
    /// `b' = 1 - 2i`.
    OneMinusTwoI,
    /// Anything else.
    Generic,
}

/// Immutable arithmetic context shared by every element of one curve.
///
/// Owns the base and scalar field contexts and the tower constants; field
/// elements and points borrow it.
#[derive(Clone, Debug)]
pub struct CurveConfig {
    pub(crate) fp: MontField,
    pub(crate) fr: MontField,
    pub(crate) xi_a: u64,
    pub(crate) twist: Twist,
    b: Limbs,
    twist_b: [Limbs; 2],
    pub(crate) twist_b_type: TwistBType,
    /// `g^k` for `g = ξ^((p - 1) / 6)` and `k = 0..6`.
    frobenius: [[Limbs; 2]; 6],
    /// `g^2` and `g^3`, inverted for M-type twists.
    twist_frobenius: [[Limbs; 2]; 2],
}

impl CurveConfig {
    /// Builds the field contexts for `p` and `r` and derives the tower
    /// constants.
    pub fn new(p: &Vint, r: &Vint, b: u64, xi_a: u64, twist: Twist, mode: Mode) -> Result<Self> {
        if p.low_limb() & 3 != 3 {
            return Err(Error::InvalidParameter("p must be 3 mod 4"));
        }
        if (p - 1).div_rem_limb(6)?.1 != 0 {
            return Err(Error::InvalidParameter("p must be 1 mod 6"));
        }

        let zero = [[0; MAX_LIMBS]; 2];
        let mut cfg = Self {
            fp: MontField::new(p, mode)?,
            fr: MontField::new(r, mode)?,
            xi_a,
            twist,
            b: [0; MAX_LIMBS],
            twist_b: zero,
            twist_b_type: TwistBType::Generic,
            frobenius: [zero; 6],
            twist_frobenius: [zero; 2],
        };

        let (b_raw, twist_b, frobenius, twist_frobenius) = {
            let cfg = &cfg;
            let xi = Fp2::xi(cfg);

            // ξ must be neither a square nor a cube in Fp2
            let order = p * p - 1;
            let one = Fp2::one(cfg);
            if xi.pow_vartime(&(&order >> 1)) == one || xi.pow_vartime(&(&order / 3)) == one {
                return Err(Error::InvalidParameter("xi is a square or a cube in Fp2"));
            }

            let xi_inv: Option<Fp2<'_>> = xi.invert().into();
            let xi_inv = xi_inv.ok_or(Error::InvalidParameter("xi is zero"))?;
            let b = Fp::from_u64(cfg, b);
            let twist_b = match twist {
                Twist::M => xi.mul_fp(&b),
                Twist::D => xi_inv.mul_fp(&b),
            };

            let g = xi.pow_vartime(&((p - 1) / 6));
            let mut frobenius = [zero; 6];
            let mut gk = one;
            for entry in frobenius.iter_mut() {
                *entry = gk.to_raw();
                gk *= g;
            }

            let mut g2 = g.square();
            let mut g3 = g2 * g;
            if twist == Twist::M {
                g2 = inverse_or_zero(&g2);
                g3 = inverse_or_zero(&g3);
            }

            (b.v, twist_b.to_raw(), frobenius, [g2.to_raw(), g3.to_raw()])
        };

        cfg.b = b_raw;
        cfg.twist_b = twist_b;
        cfg.frobenius = frobenius;
        cfg.twist_frobenius = twist_frobenius;
        cfg.twist_b_type = {
            let cfg = &cfg;
            let tb = cfg.twist_b();
            let (one, two) = (Fp::one(cfg), Fp::from_u64(cfg, 2));
            if tb == Fp2::new(one, -one) {
                TwistBType::OneMinusI
            } else if tb == Fp2::new(one, -two) {
                TwistBType::OneMinusTwoI
            } else {
                TwistBType::Generic
            }
        };
        Ok(cfg)
    }

    /// Base field context.
    pub fn fp(&self) -> &MontField {
        &self.fp
    }

    /// Scalar field context; its modulus is the group order `r`.
    pub fn fr(&self) -> &MontField {
        &self.fr
    }

    /// Real part of `ξ`.
    pub fn xi_a(&self) -> u64 {
        self.xi_a
    }

    /// Twist placement.
    pub fn twist(&self) -> Twist {
        self.twist
    }

    /// Classification of the twist coefficient.
    pub fn twist_b_type(&self) -> TwistBType {
        self.twist_b_type
    }

    /// Coefficient `b` of `E: y^2 = x^3 + b`.
    pub fn b(&self) -> Fp<'_> {
        Fp::from_raw(self, self.b)
    }

    /// Coefficient `b'` of the twist `E': y^2 = x^3 + b'`.
    pub fn twist_b(&self) -> Fp2<'_> {
        Fp2::from_raw(self, &self.twist_b)
    }

    /// `ξ^(k (p - 1) / 6)` for `k < 6`.
    pub fn frobenius_coeff(&self, k: usize) -> Fp2<'_> {
        Fp2::from_raw(self, &self.frobenius[k % 6])
    }

    /// Constants `(c_x, c_y)` of the Frobenius endomorphism on the twist,
    /// `π(x, y, z) = (conj(x) c_x, conj(y) c_y, conj(z))`.
    pub fn twist_frobenius(&self) -> (Fp2<'_>, Fp2<'_>) {
        (
            Fp2::from_raw(self, &self.twist_frobenius[0]),
            Fp2::from_raw(self, &self.twist_frobenius[1]),
        )
    }
}

fn inverse_or_zero<'a>(x: &Fp2<'a>) -> Fp2<'a> {
    x.invert().unwrap_or(Fp2::zero(x.config()))
}
