//! Named curve parameter sets.

use crate::{Error, Result};
use core::{fmt, str::FromStr};

/// Placement of the sextic twist.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Twist {
    /// Multiplicative twist: `E': y^2 = x^3 + b ξ`.
    M,

    /// Divisive twist: `E': y^2 = x^3 + b / ξ`.
    D,
}

/// Pairing-friendly curve family.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    /// Barreto-Naehrig, embedding degree 12, `p(z) = 36z^4 + 36z^3 + 24z^2 + 6z + 1`.
    Bn,

    /// Barreto-Lynn-Scott, embedding degree 12, `r(z) = z^4 - z^2 + 1`.
    Bls12,
}

/// Parameters that fully determine a curve and its pairing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CurveParam {
    /// Curve seed `z`: decimal or `0x` hexadecimal with an optional `-`.
    pub z: &'static str,

    /// Coefficient of `y^2 = x^3 + b`.
    pub b: u64,

    /// Real part of the sextic non-residue `ξ = xi_a + i`.
    pub xi_a: u64,

    /// Twist placement.
    pub twist: Twist,

    /// Curve family.
    pub family: Family,
}

impl CurveParam {
    /// BN curve with a 254-bit prime, `z = -(2^62 + 2^55 + 1)`.
    pub const FP254_BNB: Self = Self::bn("-0x4080000000000001", 2, 1);

    /// BN curve with a 382-bit prime.
    pub const FP382_1: Self = Self::bn("-0x400011000000000000000001", 2, 1);

    /// BN curve with a 382-bit prime.
    pub const FP382_2: Self = Self::bn("-0x400040090001000000000001", 2, 1);

    /// BN curve with a 462-bit prime.
    pub const FP462: Self = Self::bn("0x4001fffffffffffffffffffffbfff", 5, 2);

    /// BN curve with a 254-bit prime used by zkSNARK tooling (`alt_bn128`).
    pub const SNARK1: Self = Self::bn("4965661367192848881", 3, 9);

    /// BLS12-381.
    pub const BLS12_381: Self = Self {
        z: "-0xd201000000010000",
        b: 4,
        xi_a: 1,
        twist: Twist::M,
        family: Family::Bls12,
    };

    const fn bn(z: &'static str, b: u64, xi_a: u64) -> Self {
        Self {
            z,
            b,
            xi_a,
            twist: Twist::D,
            family: Family::Bn,
        }
    }
}

/// Identifier of a built-in curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum CurveId {
    /// [`CurveParam::FP254_BNB`].
    Fp254BNb = 0,
    /// [`CurveParam::FP382_1`].
    Fp382_1 = 1,
    /// [`CurveParam::FP382_2`].
    Fp382_2 = 2,
    /// [`CurveParam::FP462`].
    Fp462 = 3,
    /// [`CurveParam::SNARK1`].
    Snark1 = 4,
    /// [`CurveParam::BLS12_381`].
    Bls12_381 = 5,
}

impl CurveId {
    /// Every built-in curve, in identifier order.
    pub const ALL: [CurveId; 6] = [
        CurveId::Fp254BNb,
        CurveId::Fp382_1,
        CurveId::Fp382_2,
        CurveId::Fp462,
        CurveId::Snark1,
        CurveId::Bls12_381,
    ];

    /// Parameters of this curve.
    pub const fn param(self) -> CurveParam {
        match self {
            CurveId::Fp254BNb => CurveParam::FP254_BNB,
            CurveId::Fp382_1 => CurveParam::FP382_1,
            CurveId::Fp382_2 => CurveParam::FP382_2,
            CurveId::Fp462 => CurveParam::FP462,
            CurveId::Snark1 => CurveParam::SNARK1,
            CurveId::Bls12_381 => CurveParam::BLS12_381,
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::Fp254BNb => "Fp254BNb",
            CurveId::Fp382_1 => "Fp382_1",
            CurveId::Fp382_2 => "Fp382_2",
            CurveId::Fp462 => "Fp462",
            CurveId::Snark1 => "SNARK1",
            CurveId::Bls12_381 => "BLS12_381",
        }
    }
}

impl TryFrom<u32> for CurveId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        CurveId::ALL
            .into_iter()
            .find(|c| *c as u32 == id)
            .ok_or(Error::UnknownCurve(id))
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Matches the canonical name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        CurveId::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownCurveName)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
