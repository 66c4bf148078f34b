//! Final exponentiation.

use super::Pairing;
use crate::CurveId;
use crate::field::Fp12;
use crate::group::{G1, G2};

impl Pairing {
    /// Easy part of the final exponentiation, `x^((p^6 - 1)(p^2 + 1))`,
    /// which lands in the cyclotomic subgroup. Zero maps to zero.
    pub fn map_to_cyclotomic<'a>(&'a self, x: &Fp12<'a>) -> Fp12<'a> {
        let zz = x.frobenius2() * x;
        let inv = zz.invert().unwrap_or(Fp12::zero(&self.cfg));
        inv * zz.conjugate()
    }

    /// Raises a Miller loop value to `(p^12 - 1) / r` (times three on BLS12
    /// curves), making the pairing value unique.
    pub fn final_exp<'a>(&'a self, x: &Fp12<'a>) -> Fp12<'a> {
        let y = self.map_to_cyclotomic(x);
        self.family.final_exp_hard_part(self, &y)
    }

    /// The reduced optimal ate pairing `e(P, Q)`.
    pub fn pairing<'a>(&'a self, p: &G1<'a>, q: &G2<'a>) -> Fp12<'a> {
        self.final_exp(&self.miller_loop(p, q))
    }

    /// `x^z` for a cyclotomic `x`.
    pub fn pow_z<'a>(&'a self, x: &Fp12<'a>) -> Fp12<'a> {
        let y = if self.curve == Some(CurveId::Fp254BNb) {
            self.fixed_power_bn254(x)
        } else {
            self.pow_z_generic(x)
        };
        if self.params.is_negative() { y.conjugate() } else { y }
    }

    /// `x^|z|` by cyclotomic squarings over the signed digits of `|z|`.
    pub(super) fn pow_z_generic<'a>(&'a self, x: &Fp12<'a>) -> Fp12<'a> {
        let x_inv = x.conjugate();
        let mut y = *x;
        for &digit in &self.params.z_digits[1..] {
            y = y.cyclotomic_square();
            match digit {
                1 => y *= x,
                -1 => y *= x_inv,
                _ => {}
            }
        }
        y
    }
}

/// Hard part for BN curves: `x^((p^4 - p^2 + 1) / r)`, evaluated as
/// `x^(c0 + c1 p + c2 p^2 + p^3)` through an addition chain in `x^z`,
/// `x^(z^2)` and `x^(z^3)`.
pub(crate) fn hard_part_bn<'a>(e: &'a Pairing, f: &Fp12<'a>) -> Fp12<'a> {
    let fp = f.frobenius();
    let fp2 = fp.frobenius();
    let fp3 = fp2.frobenius();
    let fx = e.pow_z(f);
    let fx2 = e.pow_z(&fx);
    let fx3 = e.pow_z(&fx2);

    let y0 = fp * fp2 * fp3;
    let y1 = f.conjugate();
    let y2 = fx2.frobenius2();
    let y3 = fx.frobenius().conjugate();
    let y4 = (fx * fx2.frobenius()).conjugate();
    let y5 = fx2.conjugate();
    let y6 = (fx3 * fx3.frobenius()).conjugate();

    let mut t0 = y6.cyclotomic_square() * y4 * y5;
    let mut t1 = y3 * y5 * t0;
    t0 *= y2;
    t1 = (t1.cyclotomic_square() * t0).cyclotomic_square();
    t0 = t1 * y1;
    t1 *= y0;
    t0 = t0.cyclotomic_square();
    t1 * t0
}

/// Hard part for BLS12 curves: `x^(3 (p^4 - p^2 + 1) / r)`.
pub(crate) fn hard_part_bls12<'a>(e: &'a Pairing, x: &Fp12<'a>) -> Fp12<'a> {
    let a0 = x.conjugate();
    let a2 = e.pow_z(x);
    let mut a3 = a2.cyclotomic_square();
    let mut a1 = a0.cyclotomic_square() * a2;
    let mut a7 = e.pow_z(&a1);
    let mut a4 = e.pow_z(&a7);
    let a5 = e.pow_z(&a4);
    a3 *= a5;
    let a6 = e.pow_z(&a3);

    a1 = a1.conjugate() * a6 * x;
    a3 = (a3 * a0).frobenius();
    a1 *= a3;
    a4 = (a4 * a2).frobenius2();
    a1 *= a4;
    a7 *= x;
    a7.frobenius3() * a1
}

#[cfg(test)]
mod tests {
    use crate::{CurveId, Mode, Pairing};

    #[test]
    fn hard_part_constants_cover_the_exponent() {
        for id in CurveId::ALL {
            let e = Pairing::new(id, Mode::Auto).unwrap();
            let params = e.params();
            let (p, r) = (&params.p, &params.r);
            let target = (p.pow(4) - p.pow(2) + 1i64) / r;
            match id {
                CurveId::Bls12_381 => assert_eq!(params.hard_part_exponent(), target * 3),
                _ => assert_eq!(params.hard_part_exponent(), target, "{id}"),
            }
        }
    }

    #[test]
    fn final_exp_matches_plain_power() {
        for id in CurveId::ALL {
            let e = Pairing::new(id, Mode::Auto).unwrap();
            let f = e.miller_loop(&e.g1_generator(), &e.g2_generator());
            let params = e.params();
            let p = &params.p;
            let easy = (p.pow(6) - 1i64) * (p.pow(2) + 1i64);
            let exp = easy * params.hard_part_exponent();
            assert_eq!(e.final_exp(&f), f.pow_vartime(&exp), "{id}");
        }
    }

    #[test]
    fn pow_z_matches_plain_power() {
        for id in [CurveId::Fp254BNb, CurveId::Snark1, CurveId::Bls12_381] {
            let e = Pairing::new(id, Mode::Auto).unwrap();
            let f = e.pairing(&e.g1_generator(), &e.g2_generator());
            let z = &e.params().z;
            let expected = f.pow_vartime(&z.abs());
            let expected = if z.is_negative() {
                expected.conjugate()
            } else {
                expected
            };
            assert_eq!(e.pow_z(&f), expected, "{id}");
        }
    }
}
