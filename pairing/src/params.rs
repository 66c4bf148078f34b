//! Parameters derived from a curve seed.

use crate::curve_param::{CurveParam, Family};
use crate::{Error, Result};
use alloc::vec::Vec;
use vint::Vint;

/// Integers derived once from a [`CurveParam`] and read-only afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommonParams {
    /// Curve family the seed was expanded with.
    pub family: Family,

    /// Curve seed.
    pub z: Vint,

    /// `|z|`.
    pub abs_z: Vint,

    /// Base field modulus.
    pub p: Vint,

    /// Prime group order.
    pub r: Vint,

    /// Miller loop scalar: `|6z + 2|` for BN, `|z|` for BLS12.
    pub loop_scalar: Vint,

    /// Signed digits of [`CommonParams::loop_scalar`], most significant first.
    pub si: Vec<i8>,

    /// Whether [`CommonParams::si`] is a NAF rather than plain binary.
    pub use_naf: bool,

    /// Signed digits of `|z|` used by the exponentiation by `z`.
    pub z_digits: Vec<i8>,

    /// Number of line coefficients produced by precomputation on G2.
    pub precomputed_len: usize,

    /// Base-`p` digits `c_i` of the hard part exponent of the final
    /// exponentiation, lowest first. BN has an implicit `c_3 = 1`.
    ///
    /// The exponentiation itself runs as a chain of exponentiations by `z`
    /// and Frobenius maps whose result is `x` raised to
    /// [`CommonParams::hard_part_exponent`].
    pub hard_part: Vec<Vint>,

    /// Cofactor of the prime-order subgroup of `E(Fp)`.
    pub g1_cofactor: Vint,

    /// Cofactor of the prime-order subgroup of `E'(Fp2)`.
    pub g2_cofactor: Vint,
}

impl CommonParams {
    /// Derives the field modulus, group order, Miller loop digits and
    /// final exponentiation constants.
    pub fn new(param: &CurveParam) -> Result<Self> {
        let family = param.family.strategy();
        let z: Vint = param.z.parse()?;
        if z.is_zero() {
            return Err(Error::InvalidParameter("z must be non-zero"));
        }

        let (p, r) = family.derive_modulus_and_order(&z)?;
        if !p.is_prime() || !r.is_prime() {
            return Err(Error::InvalidParameter("p and r must be prime"));
        }

        let loop_scalar = family.loop_scalar(&z);
        let (si, use_naf) = loop_scalar.signed_digits();
        if si.len() < 2 {
            return Err(Error::InvalidParameter("Miller loop scalar is too short"));
        }
        let (z_digits, _) = z.signed_digits();

        let additions = si[1..].iter().filter(|&&d| d != 0).count();
        let precomputed_len = (si.len() - 1) + additions + family.extra_line_count();

        Ok(Self {
            family: param.family,
            abs_z: z.abs(),
            hard_part: family.hard_part_exponents(&z),
            g1_cofactor: family.g1_cofactor(&z),
            g2_cofactor: family.g2_cofactor(&z, &p, &r),
            z,
            p,
            r,
            loop_scalar,
            si,
            use_naf,
            z_digits,
            precomputed_len,
        })
    }

    /// Whether the seed is negative.
    pub fn is_negative(&self) -> bool {
        self.z.is_negative()
    }

    /// `sum c_i p^i` over [`CommonParams::hard_part`]: `(p^4 - p^2 + 1) / r`
    /// for BN, three times that for BLS12.
    pub fn hard_part_exponent(&self) -> Vint {
        let mut sum = Vint::zero();
        let mut pk = Vint::one();
        for c in &self.hard_part {
            sum += c * &pk;
            pk *= &self.p;
        }
        match self.family {
            Family::Bn => sum + pk,
            Family::Bls12 => sum,
        }
    }
}
