//! Compressed cyclotomic squaring (Karabina) and the fixed-exponent power it
//! enables for `Fp254BNb`.

use super::Pairing;
use crate::field::{Fp2, Fp12};
use crate::{CurveId, Error, Result};

/// Cyclotomic element kept as the four coefficients
/// `(g2, g3, g4, g5)` = flat positions `(3, 2, 1, 5)` that squaring updates.
#[derive(Clone, Copy)]
struct Compressed<'a> {
    g2: Fp2<'a>,
    g3: Fp2<'a>,
    g4: Fp2<'a>,
    g5: Fp2<'a>,
}

impl<'a> Compressed<'a> {
    fn new(x: &Fp12<'a>) -> Self {
        let f = x.to_flat();
        Self {
            g2: f[3],
            g3: f[2],
            g4: f[1],
            g5: f[5],
        }
    }

    fn square(&self) -> Self {
        let Self { g2, g3, g4, g5 } = *self;

        let t0 = g4.square();
        let t1 = g5.square();
        let t2 = t1.mul_xi() + t0;
        let g45 = ((g4 + g5).square() - t0 - t1).mul_xi();

        let t3 = (g2 + g3).square();
        let g2_sq = g2.square();
        let g3_sq = g3.square();
        let t4 = g3_sq.mul_xi() + g2_sq;
        let g23 = t3 - g2_sq - g3_sq;

        Self {
            g2: (g2 + g45).double() + g45,
            g3: (t2 - g3).double() + t2,
            g4: (t4 - g4).double() + t4,
            g5: (g5 + g23).double() + g23,
        }
    }

    /// Numerator and denominator of the recovered `g1`.
    fn recover_g1_fraction(&self) -> (Fp2<'a>, Fp2<'a>) {
        let Self { g2, g3, g4, g5 } = *self;
        if bool::from(g2.is_zero()) {
            ((g4 + g4) * g5, g3)
        } else {
            let g4_sq = g4.square();
            let t = (g4_sq - g3).double() + g4_sq;
            ((g5.square().mul_xi() + t).half().half(), g2)
        }
    }

    /// Rebuilds the full element given the recovered `g1`.
    fn decompress(&self, g1: Fp2<'a>) -> Fp12<'a> {
        let Self { g2, g3, g4, g5 } = *self;
        let g34 = g3 * g4;
        let t0 = (g1.square() - g34).double() - g34 + g2 * g5;
        let g0 = t0.mul_xi() + Fp2::one(g1.config());
        Fp12::from_flat([g0, g4, g3, g2, g1, g5])
    }
}

impl Pairing {
    /// `x^|z|` for `Fp254BNb`, whose seed is `-(2^62 + 2^55 + 1)`, using
    /// compressed squarings and one shared inversion.
    ///
    /// `x` must lie in the cyclotomic subgroup. Returns
    /// [`Error::CurveMismatch`] on any other curve.
    pub fn fixed_power<'a>(&'a self, x: &Fp12<'a>) -> Result<Fp12<'a>> {
        if self.curve != Some(CurveId::Fp254BNb) {
            return Err(Error::CurveMismatch);
        }
        Ok(self.fixed_power_bn254(x))
    }

    pub(super) fn fixed_power_bn254<'a>(&'a self, x: &Fp12<'a>) -> Fp12<'a> {
        let mut c55 = Compressed::new(x);
        for _ in 0..55 {
            c55 = c55.square();
        }
        let mut c62 = c55;
        for _ in 0..7 {
            c62 = c62.square();
        }

        let (n55, d55) = c55.recover_g1_fraction();
        let (n62, d62) = c62.recover_g1_fraction();
        let Some(inv) = Option::<Fp2<'a>>::from((d55 * d62).invert()) else {
            log::trace!("compressed power fell back to plain exponentiation");
            return self.pow_z_generic(x);
        };

        let x55 = c55.decompress(n55 * inv * d62);
        let x62 = c62.decompress(n62 * inv * d55);
        x55 * x * x62
    }
}

#[cfg(test)]
mod tests {
    use super::Compressed;
    use crate::{CurveId, Error, Mode, Pairing};
    use vint::Vint;

    #[test]
    fn compressed_squaring_matches_full_squaring() {
        let e = Pairing::new(CurveId::Fp254BNb, Mode::Auto).unwrap();
        let f = e.pairing(&e.g1_generator(), &e.g2_generator());

        let c = Compressed::new(&f).square().square();
        let (n, d) = c.recover_g1_fraction();
        let g1 = n * Option::<crate::field::Fp2<'_>>::from(d.invert()).unwrap();
        assert_eq!(c.decompress(g1), f.square().square());
    }

    #[test]
    fn fixed_power_is_power_by_abs_z() {
        let e = Pairing::new(CurveId::Fp254BNb, Mode::Auto).unwrap();
        let f = e.pairing(&e.g1_generator(), &e.g2_generator());
        let abs_z: Vint = "0x4080000000000001".parse().unwrap();
        assert_eq!(e.fixed_power(&f).unwrap(), f.pow_vartime(&abs_z));
    }

    #[test]
    fn fixed_power_rejects_other_curves() {
        let e = Pairing::new(CurveId::Bls12_381, Mode::Auto).unwrap();
        let f = crate::field::Fp12::one(e.config());
        assert_eq!(e.fixed_power(&f), Err(Error::CurveMismatch));
    }
}
